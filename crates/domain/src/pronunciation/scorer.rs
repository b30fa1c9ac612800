//! Attempt scoring

use serde::{Deserialize, Serialize};

use super::{normalize_arabic, similarity_ratio};
use crate::value_objects::{Feedback, Score};

/// Outcome of scoring one attempt against its reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// The transcript as returned by speech-to-text, not normalized
    pub transcript: String,
    pub score: Score,
    /// `score >= 85`
    #[serde(rename = "match")]
    pub is_match: bool,
    pub feedback: Feedback,
}

impl ScoreResult {
    /// Derive match and feedback from a score
    #[must_use]
    pub fn from_score(transcript: impl Into<String>, score: Score) -> Self {
        Self {
            transcript: transcript.into(),
            score,
            is_match: score.is_match(),
            feedback: Feedback::for_score(score),
        }
    }
}

/// Score a transcript against the reference phrase
///
/// Both strings are normalized before comparison. Two strings that are empty
/// after normalization score 100.
///
/// # Examples
///
/// ```
/// use domain::pronunciation::score_attempt;
/// use domain::Feedback;
///
/// let result = score_attempt("مرحبا بالعالم", "مرحبًا بالعالم");
/// assert_eq!(result.score.value(), 100);
/// assert!(result.is_match);
/// assert_eq!(result.feedback, Feedback::Perfect);
/// ```
#[must_use]
pub fn score_attempt(reference: &str, transcript: &str) -> ScoreResult {
    let ratio = similarity_ratio(&normalize_arabic(reference), &normalize_arabic(transcript));
    ScoreResult::from_score(transcript, Score::from_ratio(ratio))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tanween_difference_scores_perfect() {
        let result = score_attempt("مرحبا بالعالم", "مرحبًا بالعالم");
        assert_eq!(result.score.value(), 100);
        assert!(result.is_match);
        assert_eq!(result.feedback, Feedback::Perfect);
        assert_eq!(result.transcript, "مرحبًا بالعالم");
    }

    #[test]
    fn different_word_scores_low() {
        let result = score_attempt("شكرا", "مرحبا");
        assert_eq!(result.score.value(), 44);
        assert!(!result.is_match);
        assert_eq!(result.feedback, Feedback::TryAgain);
    }

    #[test]
    fn teh_marbuta_placeholder_does_not_match_heh() {
        let result = score_attempt("مدرسة", "مدرسه");
        assert_eq!(result.score.value(), 80);
        assert!(!result.is_match);
        assert_eq!(result.feedback, Feedback::GoodTry);
    }

    #[test]
    fn alef_variants_score_perfect() {
        assert_eq!(score_attempt("أنا بخير", "انا بخير").score.value(), 100);
    }

    #[test]
    fn empty_pair_scores_perfect() {
        let result = score_attempt("", "");
        assert_eq!(result.score.value(), 100);
        assert!(result.is_match);
    }

    #[test]
    fn diacritics_only_reference_scores_against_empty_transcript() {
        assert_eq!(score_attempt("\u{064E}\u{0651}", "").score.value(), 100);
    }

    #[test]
    fn empty_transcript_scores_zero() {
        let result = score_attempt("شكرا", "");
        assert_eq!(result.score.value(), 0);
        assert_eq!(result.feedback, Feedback::TryAgain);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(score_attempt("شكرا", "  شكرا\n").score.value(), 100);
    }

    #[test]
    fn from_score_uses_independent_thresholds() {
        let result = ScoreResult::from_score("x", Score::new(87).unwrap());
        assert!(result.is_match);
        assert_eq!(result.feedback, Feedback::GoodTry);
    }

    #[test]
    fn serializes_with_match_key() {
        let json = serde_json::to_value(score_attempt("شكرا", "شكرًا")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "transcript": "شكرًا",
                "score": 100,
                "match": true,
                "feedback": "Perfect!"
            })
        );
    }
}
