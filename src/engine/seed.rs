// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Initial codewords for a search.

use crate::error::SpaceError;
use crate::space::{covered_by, Point, PointSet, Space};

/// The starting partial solution and the points it covers.
///
/// The origin is always the first codeword; any extra points follow in the
/// order given. Duplicates are kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    points: Vec<Point>,
    covered: PointSet,
}

impl Seed {
    /// The origin followed by `extra`.
    pub fn new(space: &Space, extra: impl IntoIterator<Item = Point>) -> Result<Self, SpaceError> {
        let mut points = vec![Point::ORIGIN];
        for point in extra {
            if !space.contains(point) {
                return Err(SpaceError::OutOfSpace {
                    point: point.value(),
                    length: space.length(),
                });
            }
            points.push(point);
        }
        let covered = covered_by(space, &points, space.radius());
        Ok(Self { points, covered })
    }

    /// The origin alone.
    pub fn origin(space: &Space) -> Self {
        let points = vec![Point::ORIGIN];
        let covered = covered_by(space, &points, space.radius());
        Self { points, covered }
    }

    /// Parse extra points from binary strings.
    pub fn parse<I, S>(space: &Space, extra: I) -> Result<Self, SpaceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = extra
            .into_iter()
            .map(|text| space.parse_point(text.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(space, parsed)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn covered(&self) -> &PointSet {
        &self.covered
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true: the origin is always present.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
