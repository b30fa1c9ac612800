//! Pronunciation score value object
//!
//! A percentage in `0..=100` derived from a similarity ratio by truncation.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Score;
//!
//! let score = Score::from_ratio(0.857);
//! assert_eq!(score.value(), 85);
//! assert!(score.is_match());
//!
//! assert!(Score::new(101).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a score is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid score: {0} is out of range (must be 0-100)")]
pub struct InvalidScore(u8);

/// Pronunciation score (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Maximum score
    pub const MAX: u8 = 100;

    /// Lowest score counted as a match
    pub const MATCH_THRESHOLD: u8 = 85;

    /// Create a validated score
    ///
    /// # Errors
    ///
    /// Returns `InvalidScore` if the value is greater than 100.
    pub const fn new(value: u8) -> Result<Self, InvalidScore> {
        if value > Self::MAX {
            Err(InvalidScore(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Convert a similarity ratio to a score, truncating toward zero
    ///
    /// Ratios outside `[0.0, 1.0]` (and NaN) are clamped.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_ratio(ratio: f64) -> Self {
        let percent = (ratio * 100.0).clamp(0.0, f64::from(Self::MAX));
        // `as` truncates and maps NaN to 0
        Self(percent as u8)
    }

    /// Get the score as a u8
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether the attempt counts as matching the reference
    #[must_use]
    pub const fn is_match(self) -> bool {
        self.0 >= Self::MATCH_THRESHOLD
    }
}

impl TryFrom<u8> for Score {
    type Error = InvalidScore;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
