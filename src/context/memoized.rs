// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data (Tier 1: MEMO).

use crate::space::{ball, Point, PointSet, Space};

/// Every ball the filters can ask for, precomputed.
///
/// Holds one row per radius in `base ..= max`, each row holding the ball of
/// that radius around every point of the universe. Rows are built from the
/// ball around the origin: the Hamming metric is invariant under xor, so the
/// ball around c is the origin ball translated by c.
///
/// # Size
///
/// Each row is 2^L point sets of 256 bytes: 512 KB per radius for L=11.
/// With the default overlap of 2 the table holds three rows (~1.5 MB).
#[derive(Debug, Clone)]
pub struct BallTable {
    base: usize,
    rows: Vec<Vec<PointSet>>,
}

impl BallTable {
    /// Compute balls of every radius in `base_radius ..= max_radius`.
    pub fn new(space: &Space, base_radius: usize, max_radius: usize) -> Self {
        tracing::debug!(
            length = space.length(),
            base_radius,
            max_radius,
            "initializing ball table"
        );

        let rows: Vec<Vec<PointSet>> = (base_radius..=max_radius)
            .map(|radius| {
                let origin_ball = ball(space, Point::ORIGIN, radius);
                space
                    .points()
                    .map(|center| {
                        origin_ball
                            .iter()
                            .map(|p| Point::new(p.value() ^ center.value()))
                            .collect()
                    })
                    .collect()
            })
            .collect();

        tracing::debug!(
            radii = rows.len(),
            points = space.universe_size(),
            "ball table complete"
        );

        Self {
            base: base_radius,
            rows,
        }
    }

    /// The ball of `radius` around `center`.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is outside the precomputed range.
    pub fn ball(&self, center: Point, radius: usize) -> &PointSet {
        assert!(
            radius >= self.base && radius - self.base < self.rows.len(),
            "Radius {} not in ball table [{}...{}]",
            radius,
            self.base,
            self.base + self.rows.len() - 1
        );
        &self.rows[radius - self.base][center.index()]
    }

    /// Radii held by this table.
    pub fn radii(&self) -> std::ops::RangeInclusive<usize> {
        self.base..=self.base + self.rows.len() - 1
    }
}
