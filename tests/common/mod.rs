// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use hamming_cover::space::covered_by;
use hamming_cover::{Point, SearchConfig, SearchEngine, Space};

/// An engine over `length`-bit words at `radius`, with maximal-touching
/// applied at every level and progress reporting off.
pub fn engine_for(length: usize, radius: usize, max_size: usize, overlap: usize) -> SearchEngine {
    let space = Space::new(length, radius).unwrap();
    let config = SearchConfig::new(&space, max_size, overlap, max_size, 0).unwrap();
    SearchEngine::new(space, config)
}

/// Points from integer values.
pub fn points(values: &[u16]) -> Vec<Point> {
    values.iter().map(|&v| Point::new(v)).collect()
}

/// Panics unless `codewords` cover every point of `space`.
pub fn assert_covering(space: &Space, codewords: &[Point]) {
    let covered = covered_by(space, codewords, space.radius());
    assert_eq!(
        covered.len(),
        space.universe_size(),
        "{} leaves {} points uncovered",
        space.display_sequence(codewords),
        space.universe_size() - covered.len()
    );
}
