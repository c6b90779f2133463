// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Point type for binary words.
//!
//! A Point is a binary word of the Hamming space, stored as an integer where
//! bit k is coordinate k. Points carry no length of their own; rendering and
//! parsing go through [`Space`](crate::space::Space), which knows the word length.

use std::fmt;

/// A binary word, as an integer in `[0, 2^MAX_LENGTH)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point(u16);

impl Point {
    /// The all-zero word. Every search starts from it.
    pub const ORIGIN: Point = Point(0);

    /// Create a point from its integer value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the integer value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Get the value as an index into point-indexed tables.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The point with coordinate `bit` inverted.
    pub const fn flip(self, bit: usize) -> Self {
        Self(self.0 ^ (1 << bit))
    }

    /// Whether coordinate `bit` is set.
    pub const fn bit(self, bit: usize) -> bool {
        (self.0 >> bit) & 1 != 0
    }

    /// Hamming distance: the number of coordinates in which the words differ.
    pub const fn distance(self, other: Point) -> usize {
        (self.0 ^ other.0).count_ones() as usize
    }
}

impl From<u16> for Point {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Display for Point {
    /// Length-free rendering, as a decimal integer.
    ///
    /// Use `Space::display` for the fixed-width binary form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
