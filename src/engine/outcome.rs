// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Result of a search or of one branch of it.

use crate::space::Point;

/// What a branch of the search produced.
///
/// A branch either completes a covering within the size bound or runs past
/// the bound without doing so. The bound case is an ordinary result, not an
/// error: callers must check for it rather than assume success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A complete covering: the seed followed by the chosen codewords.
    Covered(Vec<Point>),

    /// Every branch ran past `max_size` without covering the space.
    DepthExceeded,
}

impl Outcome {
    /// Whether a covering was found.
    pub fn is_covered(&self) -> bool {
        matches!(self, Outcome::Covered(_))
    }

    /// Size of the covering, if any.
    pub fn len(&self) -> Option<usize> {
        self.points().map(<[Point]>::len)
    }

    /// The covering's codewords, if any.
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Outcome::Covered(points) => Some(points),
            Outcome::DepthExceeded => None,
        }
    }

    /// Consume the outcome, yielding the covering if any.
    pub fn into_points(self) -> Option<Vec<Point>> {
        match self {
            Outcome::Covered(points) => Some(points),
            Outcome::DepthExceeded => None,
        }
    }

    /// Whether `self` should replace `other` as the best seen so far.
    ///
    /// Only a strictly smaller covering wins, so among equals the first
    /// encountered is kept. Running out of depth never wins.
    pub fn improves_on(&self, other: &Outcome) -> bool {
        match (self.len(), other.len()) {
            (Some(_), None) => true,
            (Some(mine), Some(theirs)) => mine < theirs,
            (None, _) => false,
        }
    }
}
