// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PointSet type for representing sets of points as bitsets.
//!
//! A PointSet covers the largest supported universe (2^MAX_LENGTH = 2048
//! points) with 32 u64 words. Smaller spaces simply leave the high words empty.
//!
//! # Examples
//!
//! ```
//! use hamming_cover::space::{Point, PointSet};
//!
//! let mut set = PointSet::empty();
//! set.insert(Point::new(0));
//! set.insert(Point::new(5));
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(Point::new(5)));
//! assert!(!set.contains(Point::new(3)));
//! ```

use crate::space::{constants::*, Point};
use std::fmt;

/// A set of points represented as a bitset.
///
/// Bit i (across all words) is set if point i is in the set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointSet([u64; POINTSET_LENGTH]);

impl PointSet {
    /// Create an empty point set.
    pub const fn empty() -> Self {
        Self([0; POINTSET_LENGTH])
    }

    /// Create the set of the first `total` points (0..total).
    ///
    /// # Panics
    ///
    /// Panics if `total > MAX_TOTAL`.
    pub fn first(total: usize) -> Self {
        assert!(total <= MAX_TOTAL, "Universe too large: {} > {}", total, MAX_TOTAL);
        let mut words = [0u64; POINTSET_LENGTH];

        let complete_words = total / 64;
        for word in words.iter_mut().take(complete_words) {
            *word = u64::MAX;
        }

        let remaining_bits = total % 64;
        if remaining_bits > 0 {
            words[complete_words] = (1u64 << remaining_bits) - 1;
        }

        Self(words)
    }

    /// Check if the set contains a point.
    pub fn contains(&self, point: Point) -> bool {
        let index = point.index();
        (self.0[index / 64] >> (index % 64)) & 1 != 0
    }

    /// Insert a point. Returns true if it was not already present.
    pub fn insert(&mut self, point: Point) -> bool {
        let index = point.index();
        let word = &mut self.0[index / 64];
        let mask = 1u64 << (index % 64);
        let added = *word & mask == 0;
        *word |= mask;
        added
    }

    /// Remove a point.
    pub fn remove(&mut self, point: Point) {
        let index = point.index();
        self.0[index / 64] &= !(1u64 << (index % 64));
    }

    /// Get the number of points in the set (population count).
    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Iterate over all points in the set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().enumerate().flat_map(|(word_idx, &word)| {
            WordBits(word).map(move |bit| Point::new((word_idx * 64 + bit) as u16))
        })
    }

    /// Add every point of `other` to this set.
    pub fn union_with(&mut self, other: &Self) {
        for (mine, theirs) in self.0.iter_mut().zip(other.0.iter()) {
            *mine |= theirs;
        }
    }

    /// Compute the union of two point sets.
    pub fn union(&self, other: &Self) -> Self {
        let mut result = *self;
        result.union_with(other);
        result
    }

    /// Compute the intersection of two point sets.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = [0u64; POINTSET_LENGTH];
        for i in 0..POINTSET_LENGTH {
            result[i] = self.0[i] & other.0[i];
        }
        Self(result)
    }

    /// Compute the difference of two point sets (self - other).
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = [0u64; POINTSET_LENGTH];
        for i in 0..POINTSET_LENGTH {
            result[i] = self.0[i] & !other.0[i];
        }
        Self(result)
    }

    /// Size of the intersection, without building it.
    ///
    /// This is the inner loop of every candidate filter.
    pub fn intersection_len(&self, other: &Self) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// Whether every point of `other` is in this set.
    pub fn is_superset(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(mine, theirs)| theirs & !mine == 0)
    }
}

impl Default for PointSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = Self::empty();
        for point in iter {
            set.insert(point);
        }
        set
    }
}

impl fmt::Debug for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|p| p.value())).finish()
    }
}

/// Iterator over the set bit positions of one word, lowest first.
struct WordBits(u64);

impl Iterator for WordBits {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(values: &[u16]) -> PointSet {
        values.iter().map(|&v| Point::new(v)).collect()
    }

    #[test]
    fn test_empty() {
        let set = PointSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_first() {
        assert_eq!(PointSet::first(0).len(), 0);
        assert_eq!(PointSet::first(8).len(), 8);
        assert_eq!(PointSet::first(64).len(), 64);
        assert_eq!(PointSet::first(100).len(), 100);
        assert_eq!(PointSet::first(MAX_TOTAL).len(), MAX_TOTAL);

        let set = PointSet::first(100);
        assert!(set.contains(Point::new(99)));
        assert!(!set.contains(Point::new(100)));
    }

    #[test]
    #[should_panic(expected = "Universe too large")]
    fn test_first_too_large() {
        PointSet::first(MAX_TOTAL + 1);
    }

    #[test]
    fn test_insert_contains_remove() {
        let mut set = PointSet::empty();
        assert!(set.insert(Point::new(2047)));
        assert!(!set.insert(Point::new(2047)));
        assert!(set.insert(Point::new(64)));
        assert!(set.contains(Point::new(2047)));
        assert!(set.contains(Point::new(64)));
        assert!(!set.contains(Point::new(63)));
        assert_eq!(set.len(), 2);

        set.remove(Point::new(64));
        assert!(!set.contains(Point::new(64)));
        set.remove(Point::new(64));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iter_ascending_across_words() {
        let set = set_of(&[1000, 3, 64, 63, 0, 2047]);
        let values: Vec<u16> = set.iter().map(|p| p.value()).collect();
        assert_eq!(values, vec![0, 3, 63, 64, 1000, 2047]);
    }

    #[test]
    fn test_set_algebra() {
        let a = set_of(&[1, 2, 3, 200]);
        let b = set_of(&[3, 4, 200, 300]);

        assert_eq!(a.union(&b), set_of(&[1, 2, 3, 4, 200, 300]));
        assert_eq!(a.intersection(&b), set_of(&[3, 200]));
        assert_eq!(a.difference(&b), set_of(&[1, 2]));
        assert_eq!(a.intersection_len(&b), 2);
    }

    #[test]
    fn test_is_superset() {
        let a = set_of(&[1, 2, 3, 200]);
        assert!(a.is_superset(&set_of(&[1, 200])));
        assert!(a.is_superset(&PointSet::empty()));
        assert!(!a.is_superset(&set_of(&[1, 4])));
    }

    #[test]
    fn test_debug_lists_values() {
        assert_eq!(format!("{:?}", set_of(&[5, 1])), "{1, 5}");
    }
}
