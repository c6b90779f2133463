// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for small binary covering codes.
//!
//! A covering code of radius r in the space of L-bit words is a set of
//! codewords such that every word lies within Hamming distance r of one of
//! them. This crate searches for small coverings of the 11-bit space at
//! radius 3, starting from the origin and any extra seed words.
//!
//! # Architecture
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed once per search:
//! - The ball of every point at the covering radius and at each enlarged
//!   radius the maximal-touching filter uses
//!
//! ## Per-level data
//!
//! Owned by each recursion level and never shared:
//! - The partial solution (codewords chosen so far, origin first)
//! - Its covered set, kept equal to the union of its codewords' balls
//! - The candidate pool, rebuilt from the covered set at every level
//!
//! # Search Algorithm
//!
//! Depth-first branch-and-bound with a size bound. At each level:
//!
//! 1. **Almost-disjoint**: keep the points whose ball overlaps the covered set least
//! 2. **Maximal-touching** (shallow levels only): of those, keep the ones whose
//!    enlarged ball overlaps the covered set most, once per enlarged radius
//! 3. Recurse on every remaining candidate and keep the smallest covering
//!
//! # References
//!
//! - G. Cohen, I. Honkala, S. Litsyn, A. Lobstein. *Covering Codes*. North-Holland, 1997.

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod filters;
pub mod space;
pub mod state;

// Re-export commonly used types
pub use config::SearchConfig;
pub use context::SearchContext;
pub use engine::{Outcome, SearchEngine, Seed};
pub use error::{ConfigError, Error, Result, SpaceError};
pub use space::{Point, PointSet, Space};
