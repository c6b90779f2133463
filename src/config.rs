// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search parameters.
//!
//! A [`SearchConfig`] is validated once against its [`Space`] and then owned by
//! the search context; every recursion level reads it from there.

use crate::error::ConfigError;
use crate::space::Space;

/// Bounds and heuristics for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Largest codeword sequence worth completing. Deeper branches are cut.
    pub max_size: usize,

    /// Number of enlarged radii (radius+1 ..= radius+overlap) used by the
    /// maximal-touching filter.
    pub overlap: usize,

    /// Maximal-touching is applied only while the partial solution has at
    /// most this many codewords.
    pub stop_overlap_level: usize,

    /// Progress is reported for levels up to this size. 0 reports nothing.
    pub show_level: usize,
}

impl SearchConfig {
    /// Suggested maximal size.
    pub const DEFAULT_MAX_SIZE: usize = 16;
    /// Suggested overlap.
    pub const DEFAULT_OVERLAP: usize = 2;
    /// Suggested stop-overlap level.
    pub const DEFAULT_STOP_OVERLAP_LEVEL: usize = 9;
    /// Suggested show level.
    pub const DEFAULT_SHOW_LEVEL: usize = 9;

    /// Validate parameters for a search in `space`.
    pub fn new(
        space: &Space,
        max_size: usize,
        overlap: usize,
        stop_overlap_level: usize,
        show_level: usize,
    ) -> Result<Self, ConfigError> {
        let max_total = space.universe_size();
        if max_size == 0 || max_size > max_total {
            return Err(ConfigError::MaxSizeOutOfRange {
                value: max_size,
                max: max_total,
            });
        }
        let max_overlap = Self::max_overlap(space);
        if overlap > max_overlap {
            return Err(ConfigError::OverlapOutOfRange {
                value: overlap,
                max: max_overlap,
            });
        }
        if stop_overlap_level > max_size {
            return Err(ConfigError::StopOverlapLevelOutOfRange {
                value: stop_overlap_level,
                max: max_size,
            });
        }
        if show_level > max_size {
            return Err(ConfigError::ShowLevelOutOfRange {
                value: show_level,
                max: max_size,
            });
        }
        Ok(Self {
            max_size,
            overlap,
            stop_overlap_level,
            show_level,
        })
    }

    /// Largest useful overlap for a space: (radius + 1) / 2.
    pub fn max_overlap(space: &Space) -> usize {
        (space.radius() + 1) / 2
    }

    /// Largest ball radius any filter will ask for.
    pub fn max_radius(&self, space: &Space) -> usize {
        space.radius() + self.overlap
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_size: Self::DEFAULT_MAX_SIZE,
            overlap: Self::DEFAULT_OVERLAP,
            stop_overlap_level: Self::DEFAULT_STOP_OVERLAP_LEVEL,
            show_level: Self::DEFAULT_SHOW_LEVEL,
        }
    }
}
