// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Maximal-touching filter.
//!
//! Used only at shallow levels to control branching: among the candidates,
//! prefer those whose enlarged ball meets the covered set the most, i.e. those
//! sitting closest to territory already covered.

use super::{k_intersect_candidates, max_intersect};
use crate::context::BallTable;
use crate::space::{Point, PointSet};

/// Candidates whose ball of `radius` meets `covered` in exactly the maximum
/// number of points over the candidates.
///
/// Pools of at most one candidate are returned unchanged.
pub fn maximal_touching(
    memo: &BallTable,
    candidates: Vec<Point>,
    covered: &PointSet,
    radius: usize,
) -> Vec<Point> {
    if candidates.len() <= 1 {
        return candidates;
    }
    match max_intersect(memo, &candidates, covered, radius) {
        Some(maximum) => k_intersect_candidates(memo, &candidates, covered, maximum, radius),
        None => candidates,
    }
}
