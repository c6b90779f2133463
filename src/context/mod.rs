// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO data, configuration and statistics.
//!
//! The SearchContext is what every recursion level borrows:
//! - Tier 1 (MEMO): the precomputed [`BallTable`]
//! - The validated [`SearchConfig`] and the [`Space`] it was validated for
//! - Statistics, the only part mutated during search
//!
//! The partial solution and its covered set are not stored here; each
//! recursion level owns its own copy.

pub mod memoized;

pub use memoized::BallTable;

use crate::config::SearchConfig;
use crate::space::Space;
use crate::state::statistics::Statistics;

/// Everything a search needs apart from its partial solution.
#[derive(Debug, Clone)]
pub struct SearchContext {
    /// Word length and covering radius.
    pub space: Space,
    /// Bounds and heuristics.
    pub config: SearchConfig,
    /// Precomputed balls for radius ..= radius + overlap.
    pub memo: BallTable,
    /// Counters updated during search.
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context, precomputing the balls `config` will need.
    pub fn new(space: Space, config: SearchConfig) -> Self {
        let memo = BallTable::new(&space, space.radius(), config.max_radius(&space));
        Self::with_memo(space, config, memo)
    }

    /// Create a context reusing an existing ball table.
    ///
    /// # Panics
    ///
    /// Panics if `memo` lacks a radius the configuration needs.
    pub fn with_memo(space: Space, config: SearchConfig, memo: BallTable) -> Self {
        let needed = space.radius()..=config.max_radius(&space);
        assert!(
            memo.radii().contains(needed.start()) && memo.radii().contains(needed.end()),
            "Ball table {:?} does not cover radii {:?}",
            memo.radii(),
            needed
        );
        Self {
            space,
            config,
            memo,
            statistics: Statistics::new(),
        }
    }
}
