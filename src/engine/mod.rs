// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-bounded branch-and-bound search for coverings.
//!
//! The engine extends a partial solution one codeword at a time. At each
//! level it builds a candidate pool with the [filters](crate::filters), tries
//! every candidate in ascending order, and keeps the smallest covering any of
//! them leads to.
//!
//! # Recursion
//!
//! For a partial solution of `size` codewords with covered set `covered`:
//! 1. If `size > max_size`: the branch is cut, [`Outcome::DepthExceeded`].
//! 2. If `covered` is the whole universe: the partial solution is a covering.
//! 3. Otherwise, for each candidate: recurse on the solution extended by the
//!    candidate, with `covered ∪ ball(candidate, radius)`. A result replaces
//!    the best so far only if strictly smaller.
//!
//! Each child receives its own copy of the extended solution, so siblings
//! never observe one another's codewords and there is nothing to undo.
//!
//! # Example
//!
//! ```
//! use hamming_cover::config::SearchConfig;
//! use hamming_cover::engine::{Outcome, SearchEngine, Seed};
//! use hamming_cover::space::{Point, Space};
//!
//! let space = Space::new(3, 1).unwrap();
//! let config = SearchConfig::new(&space, 4, 1, 4, 0).unwrap();
//! let mut engine = SearchEngine::new(space, config);
//!
//! let outcome = engine.search(&Seed::origin(&space));
//! assert_eq!(outcome, Outcome::Covered(vec![Point::new(0), Point::new(7)]));
//! ```

pub mod outcome;
pub mod seed;

pub use outcome::Outcome;
pub use seed::Seed;

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::filters::candidate_pool;
use crate::space::{Point, PointSet, Space};
use crate::state::statistics::{Counters, Statistics};

/// Search engine owning the context for one or more searches.
#[derive(Debug)]
pub struct SearchEngine {
    ctx: SearchContext,
}

impl SearchEngine {
    /// Create an engine, precomputing the balls `config` needs.
    pub fn new(space: Space, config: SearchConfig) -> Self {
        Self::with_context(SearchContext::new(space, config))
    }

    /// Create an engine around an existing context.
    pub fn with_context(ctx: SearchContext) -> Self {
        Self { ctx }
    }

    /// Find the smallest covering reachable from `seed` within `max_size`.
    ///
    /// The seed is borrowed and left untouched. Statistics accumulate across
    /// calls; use [`SearchEngine::reset_statistics`] between unrelated runs.
    pub fn search(&mut self, seed: &Seed) -> Outcome {
        tracing::debug!(
            seed = seed.len(),
            covered = seed.covered().len(),
            max_size = self.ctx.config.max_size,
            "starting search"
        );
        let outcome = recurse(&mut self.ctx, seed.points().to_vec(), *seed.covered());
        tracing::debug!(
            found = ?outcome.len(),
            nodes = self.ctx.statistics.get(Counters::Nodes),
            "search complete"
        );
        outcome
    }

    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }

    pub fn reset_statistics(&mut self) {
        self.ctx.statistics = Statistics::new();
    }

    pub fn context(&self) -> &SearchContext {
        &self.ctx
    }
}

fn recurse(ctx: &mut SearchContext, solution: Vec<Point>, covered: PointSet) -> Outcome {
    let size = solution.len();
    ctx.statistics.increment(Counters::Nodes);

    if size > ctx.config.max_size {
        ctx.statistics.increment(Counters::DepthExceeded);
        return Outcome::DepthExceeded;
    }

    debug_assert_eq!(
        covered,
        crate::space::covered_by(&ctx.space, &solution, ctx.space.radius()),
        "covered set out of step with partial solution"
    );

    if covered == ctx.space.full() {
        ctx.statistics.increment(Counters::Coverings);
        tracing::info!("{}", ctx.space.display_sequence(&solution));
        return Outcome::Covered(solution);
    }

    let candidates = candidate_pool(ctx, &covered, size);
    ctx.statistics.add(Counters::Candidates, candidates.len() as u64);

    let radius = ctx.space.radius();
    let mut best = Outcome::DepthExceeded;
    for (index, &candidate) in candidates.iter().enumerate() {
        if size <= ctx.config.show_level {
            tracing::info!("Level {}: {}|{}", size, index + 1, candidates.len());
        }

        let mut extended = Vec::with_capacity(size + 1);
        extended.extend_from_slice(&solution);
        extended.push(candidate);

        let mut extended_covered = covered;
        extended_covered.union_with(ctx.memo.ball(candidate, radius));

        let outcome = recurse(ctx, extended, extended_covered);
        if outcome.improves_on(&best) {
            best = outcome;
        }
    }
    best
}
