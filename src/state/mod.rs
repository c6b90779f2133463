// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! The partial solution and its covered set travel by value through the
//! recursion, so the only state shared across levels is the statistics.

pub mod statistics;

pub use statistics::{Counters, Statistics};
