// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the search as it
//! visits nodes. They are diagnostic only; no search decision reads them.

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Recursion entries.
    Nodes,
    /// Entries whose covered set was already the whole universe.
    Coverings,
    /// Entries cut by the size bound.
    DepthExceeded,
    /// Candidates tried across all levels.
    Candidates,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Add `amount` to the specified counter.
    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// All counters with their names, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        use strum::IntoEnumIterator;
        Counters::iter().map(move |c| (c.into(), self.get(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert!(stats.entries().all(|(_, v)| v == 0));
        assert_eq!(stats.entries().count(), Counters::COUNT);
    }

    #[test]
    fn test_increment_and_add() {
        let mut stats = Statistics::new();
        stats.increment(Counters::Nodes);
        stats.increment(Counters::Nodes);
        stats.add(Counters::Candidates, 5);
        assert_eq!(stats.get(Counters::Nodes), 2);
        assert_eq!(stats.get(Counters::Candidates), 5);
        assert_eq!(stats.get(Counters::Coverings), 0);
    }

    #[test]
    fn test_entry_names() {
        let names: Vec<&str> = Statistics::new().entries().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Nodes", "Coverings", "DepthExceeded", "Candidates"]);
    }
}
