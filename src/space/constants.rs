// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants for the binary Hamming space.
//!
//! The production search always runs in the space of 11-bit words with
//! covering radius 3. Smaller spaces can be built with [`Space::new`] so
//! that complete searches stay cheap in tests.
//!
//! [`Space::new`]: crate::space::Space::new

/// Word length of the production space.
pub const LENGTH: usize = 11;

/// Covering radius of the production space.
pub const DISTANCE: usize = 3;

/// Largest supported word length.
///
/// `PointSet` is a fixed-size bitset sized for this length.
pub const MAX_LENGTH: usize = 11;

/// Number of points in the largest supported universe (2^MAX_LENGTH).
pub const MAX_TOTAL: usize = 1 << MAX_LENGTH;

/// Number of u64 words needed to hold one bit per point of the largest universe.
pub const POINTSET_LENGTH: usize = MAX_TOTAL / 64;

// The bitset relies on whole words.
const _: () = assert!(MAX_TOTAL % 64 == 0);
const _: () = assert!(LENGTH <= MAX_LENGTH);
