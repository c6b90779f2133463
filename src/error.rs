// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! Only input handling can fail. The search itself never errors: running out
//! of depth is an [`Outcome`](crate::engine::Outcome), not an error.

use thiserror::Error;

/// Errors building a space or reading points in it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// Word length outside 1..=max.
    #[error("word length {length} out of range [1...{max}]")]
    LengthOutOfRange { length: usize, max: usize },

    /// A point string with no digits.
    #[error("empty point")]
    Empty,

    /// A point string with a character other than 0 or 1.
    #[error("point {text:?} has non-binary digit {digit:?}")]
    InvalidDigit { text: String, digit: char },

    /// A point string with more digits than the word length.
    #[error("point {text:?} has more than {length} digits")]
    TooLong { text: String, length: usize },

    /// A point value with bits set at or above the word length.
    #[error("point {point} is not a {length}-bit word")]
    OutOfSpace { point: u16, length: usize },
}

/// Errors validating search parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("maxSize {value} out of range [1...{max}]")]
    MaxSizeOutOfRange { value: usize, max: usize },

    #[error("overlap {value} out of range [0...{max}]")]
    OverlapOutOfRange { value: usize, max: usize },

    #[error("stopOverlapLevel {value} out of range [0...{max}]")]
    StopOverlapLevelOutOfRange { value: usize, max: usize },

    #[error("showLevel {value} out of range [0...{max}]")]
    ShowLevelOutOfRange { value: usize, max: usize },
}

/// Any error raised by the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Space(#[from] SpaceError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigError::OverlapOutOfRange { value: 3, max: 2 };
        assert_eq!(err.to_string(), "overlap 3 out of range [0...2]");

        let err = SpaceError::InvalidDigit {
            text: "0121".into(),
            digit: '2',
        };
        assert_eq!(err.to_string(), "point \"0121\" has non-binary digit '2'");
    }

    #[test]
    fn test_wrapping_is_transparent() {
        let err: Error = SpaceError::Empty.into();
        assert_eq!(err.to_string(), "empty point");
        assert!(matches!(err, Error::Space(SpaceError::Empty)));
    }
}
