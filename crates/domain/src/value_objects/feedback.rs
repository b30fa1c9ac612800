//! Learner-facing feedback label

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Score;

/// Feedback shown for a scored attempt
///
/// A score of 85-89 is a match (see [`Score::is_match`]) but is still
/// labelled `GoodTry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    /// Score of 90 or more
    #[serde(rename = "Perfect!")]
    Perfect,
    /// Score of 60 to 89
    #[serde(rename = "Good try!")]
    GoodTry,
    /// Score below 60
    #[serde(rename = "Try again")]
    TryAgain,
}

impl Feedback {
    /// Lowest score labelled `Perfect`
    pub const PERFECT_THRESHOLD: u8 = 90;

    /// Lowest score labelled `GoodTry`
    pub const GOOD_TRY_THRESHOLD: u8 = 60;

    /// Classify a score
    #[must_use]
    pub const fn for_score(score: Score) -> Self {
        match score.value() {
            s if s >= Self::PERFECT_THRESHOLD => Self::Perfect,
            s if s >= Self::GOOD_TRY_THRESHOLD => Self::GoodTry,
            _ => Self::TryAgain,
        }
    }

    /// The label sent to clients
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect!",
            Self::GoodTry => "Good try!",
            Self::TryAgain => "Try again",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(value: u8) -> Feedback {
        Feedback::for_score(Score::new(value).unwrap())
    }

    #[test]
    fn classifies_boundaries() {
        assert_eq!(feedback(100), Feedback::Perfect);
        assert_eq!(feedback(95), Feedback::Perfect);
        assert_eq!(feedback(90), Feedback::Perfect);
        assert_eq!(feedback(89), Feedback::GoodTry);
        assert_eq!(feedback(85), Feedback::GoodTry);
        assert_eq!(feedback(60), Feedback::GoodTry);
        assert_eq!(feedback(59), Feedback::TryAgain);
        assert_eq!(feedback(0), Feedback::TryAgain);
    }

    #[test]
    fn matched_band_below_perfect_reads_good_try() {
        for value in 85..90 {
            let score = Score::new(value).unwrap();
            assert!(score.is_match());
            assert_eq!(Feedback::for_score(score), Feedback::GoodTry);
        }
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&Feedback::Perfect).unwrap(), "\"Perfect!\"");
        assert_eq!(serde_json::to_string(&Feedback::GoodTry).unwrap(), "\"Good try!\"");
        assert_eq!(serde_json::to_string(&Feedback::TryAgain).unwrap(), "\"Try again\"");
    }

    #[test]
    fn deserializes_from_label() {
        let parsed: Feedback = serde_json::from_str("\"Good try!\"").unwrap();
        assert_eq!(parsed, Feedback::GoodTry);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Feedback::TryAgain.to_string(), "Try again");
    }
}
