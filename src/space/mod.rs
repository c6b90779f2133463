// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The binary Hamming space.
//!
//! This module contains the value types the search works with:
//! - Point: a binary word
//! - PointSet: a bitset of points
//! - Space: word length and covering radius, plus binary rendering and parsing
//! - ball: Hamming balls and their unions

pub mod ball;
pub mod constants;
pub mod point;
pub mod point_set;

pub use ball::{ball, ball_size, covered_by};
pub use constants::*;
pub use point::Point;
pub use point_set::PointSet;

use crate::error::SpaceError;
use std::fmt;

/// A binary Hamming space of fixed word length with a fixed covering radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Space {
    length: usize,
    radius: usize,
}

impl Space {
    /// Create a space of `length`-bit words covered at `radius`.
    pub fn new(length: usize, radius: usize) -> Result<Self, SpaceError> {
        if length == 0 || length > MAX_LENGTH {
            return Err(SpaceError::LengthOutOfRange {
                length,
                max: MAX_LENGTH,
            });
        }
        Ok(Self { length, radius })
    }

    /// Word length L.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Covering radius.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Number of points, 2^L.
    pub fn universe_size(&self) -> usize {
        1 << self.length
    }

    /// The set of every point in the space.
    pub fn full(&self) -> PointSet {
        PointSet::first(self.universe_size())
    }

    /// Whether `point` is a word of this space.
    pub fn contains(&self, point: Point) -> bool {
        point.index() < self.universe_size()
    }

    /// All points in ascending order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        (0..self.universe_size()).map(|i| Point::new(i as u16))
    }

    /// Parse a binary string, most significant bit first.
    ///
    /// Strings shorter than L are read as if left-padded with zeros.
    pub fn parse_point(&self, text: &str) -> Result<Point, SpaceError> {
        if text.is_empty() {
            return Err(SpaceError::Empty);
        }
        if let Some(digit) = text.chars().find(|c| *c != '0' && *c != '1') {
            return Err(SpaceError::InvalidDigit {
                text: text.to_string(),
                digit,
            });
        }
        if text.len() > self.length {
            return Err(SpaceError::TooLong {
                text: text.to_string(),
                length: self.length,
            });
        }
        let value = text
            .bytes()
            .fold(0u16, |acc, b| (acc << 1) | u16::from(b - b'0'));
        Ok(Point::new(value))
    }

    /// Render `point` as an L-digit binary string.
    pub fn display(&self, point: Point) -> Binary {
        Binary {
            point,
            length: self.length,
        }
    }

    /// Render a codeword sequence as `N: [p0 p1 ...]`.
    pub fn display_sequence<'a>(&self, points: &'a [Point]) -> Sequence<'a> {
        Sequence {
            points,
            length: self.length,
        }
    }
}

impl Default for Space {
    /// The production space: 11-bit words, radius 3.
    fn default() -> Self {
        Self {
            length: LENGTH,
            radius: DISTANCE,
        }
    }
}

/// Fixed-width binary rendering of a point.
#[derive(Debug, Clone, Copy)]
pub struct Binary {
    point: Point,
    length: usize,
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in (0..self.length).rev() {
            f.write_str(if self.point.bit(bit) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Rendering of a codeword sequence with its size.
#[derive(Debug, Clone, Copy)]
pub struct Sequence<'a> {
    points: &'a [Point],
    length: usize,
}

impl fmt::Display for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [", self.points.len())?;
        for (i, &point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            let binary = Binary {
                point,
                length: self.length,
            };
            write!(f, "{}", binary)?;
        }
        f.write_str("]")
    }
}
