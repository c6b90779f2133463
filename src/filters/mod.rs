// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate filters.
//!
//! Before each recursion level the search narrows the universe down to a
//! small pool of candidate codewords. Both filters work the same way: find the
//! extremal size of `ball(p, radius) ∩ covered` over a scan, then keep exactly
//! the points that reach it. Selection is an exact match on the cardinality,
//! not a threshold.
//!
//! # Organization
//!
//! - `almost_disjoint`: keep points whose ball overlaps coverage the least
//! - `maximal_touching`: among candidates, keep those whose enlarged ball
//!   overlaps coverage the most
//!
//! Pools are always in ascending point order.

pub mod almost_disjoint;
pub mod maximal_touching;

pub use almost_disjoint::almost_disjoint;
pub use maximal_touching::maximal_touching;

use crate::context::{BallTable, SearchContext};
use crate::space::{Point, PointSet, Space};

/// Size of `ball(point, radius) ∩ covered`.
fn intersect_len(memo: &BallTable, point: Point, covered: &PointSet, radius: usize) -> usize {
    memo.ball(point, radius).intersection_len(covered)
}

/// Smallest intersection with `covered` of any ball of `radius` in the universe.
pub fn min_intersect(space: &Space, memo: &BallTable, covered: &PointSet, radius: usize) -> usize {
    space
        .points()
        .map(|p| intersect_len(memo, p, covered, radius))
        .min()
        .unwrap_or(0)
}

/// Largest intersection with `covered` of any candidate's ball of `radius`.
///
/// `None` for an empty pool.
pub fn max_intersect(
    memo: &BallTable,
    candidates: &[Point],
    covered: &PointSet,
    radius: usize,
) -> Option<usize> {
    candidates
        .iter()
        .map(|&p| intersect_len(memo, p, covered, radius))
        .max()
}

/// Every point of the universe whose ball of `radius` meets `covered` in exactly `k` points.
pub fn k_intersect_universe(
    space: &Space,
    memo: &BallTable,
    covered: &PointSet,
    k: usize,
    radius: usize,
) -> Vec<Point> {
    space
        .points()
        .filter(|&p| intersect_len(memo, p, covered, radius) == k)
        .collect()
}

/// The candidates whose ball of `radius` meets `covered` in exactly `k` points.
pub fn k_intersect_candidates(
    memo: &BallTable,
    candidates: &[Point],
    covered: &PointSet,
    k: usize,
    radius: usize,
) -> Vec<Point> {
    candidates
        .iter()
        .copied()
        .filter(|&p| intersect_len(memo, p, covered, radius) == k)
        .collect()
}

/// The candidate pool for a level with `size` codewords already chosen.
///
/// Starts from the almost-disjoint points at the covering radius. While
/// `size <= stop_overlap_level`, narrows with maximal-touching at each
/// enlarged radius in turn.
pub fn candidate_pool(ctx: &SearchContext, covered: &PointSet, size: usize) -> Vec<Point> {
    let radius = ctx.space.radius();
    let mut candidates = almost_disjoint(&ctx.space, &ctx.memo, covered, radius);
    if size <= ctx.config.stop_overlap_level {
        for extra in 1..=ctx.config.overlap {
            candidates = maximal_touching(&ctx.memo, candidates, covered, radius + extra);
        }
    }
    tracing::trace!(size, pool = candidates.len(), "candidate pool");
    candidates
}
