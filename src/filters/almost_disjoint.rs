// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Almost-disjoint filter.
//!
//! Prefers points whose ball adds the most new coverage: those whose ball
//! meets the covered set in the fewest points over the whole universe.

use super::{k_intersect_universe, min_intersect};
use crate::context::BallTable;
use crate::space::{Point, PointSet, Space};

/// Points of the universe whose ball of `radius` meets `covered` in exactly
/// the minimum number of points any such ball does.
pub fn almost_disjoint(
    space: &Space,
    memo: &BallTable,
    covered: &PointSet,
    radius: usize,
) -> Vec<Point> {
    let minimum = min_intersect(space, memo, covered, radius);
    k_intersect_universe(space, memo, covered, minimum, radius)
}
