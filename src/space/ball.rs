// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hamming balls.
//!
//! The ball of radius r around c is {c} together with the balls of radius
//! r-1 around every single-bit neighbour of c. Results accumulate into a
//! [`PointSet`], so the many paths reaching the same point cost nothing extra.

use crate::space::{Point, PointSet, Space};

/// All points within Hamming distance `radius` of `center`.
pub fn ball(space: &Space, center: Point, radius: usize) -> PointSet {
    let mut ball = PointSet::empty();
    // Beyond L every point is reachable; no need to recurse deeper.
    add_to_ball(&mut ball, space.length(), center, radius.min(space.length()));
    ball
}

fn add_to_ball(ball: &mut PointSet, length: usize, center: Point, radius: usize) {
    ball.insert(center);
    if radius > 0 {
        for bit in 0..length {
            add_to_ball(ball, length, center.flip(bit), radius - 1);
        }
    }
}

/// Union of the balls of `radius` around every point of `points`.
pub fn covered_by(space: &Space, points: &[Point], radius: usize) -> PointSet {
    let mut union = PointSet::empty();
    for &point in points {
        union.union_with(&ball(space, point, radius));
    }
    union
}

/// Number of points in any ball: the sum of C(length, i) for i in 0..=radius.
pub fn ball_size(length: usize, radius: usize) -> usize {
    let mut binomial = 1usize;
    let mut total = 1usize;
    for i in 1..=radius.min(length) {
        binomial = binomial * (length + 1 - i) / i;
        total += binomial;
    }
    total
}
