//! Pronunciation scoring
//!
//! Normalization folds Arabic orthographic variation away, the similarity
//! matcher compares the normalized strings, and the scorer turns the ratio
//! into a score, a match decision and a feedback label.

mod normalizer;
mod scorer;
pub mod similarity;

pub use normalizer::{is_tashkeel, normalize_arabic};
pub use scorer::{score_attempt, ScoreResult};
pub use similarity::{similarity_ratio, MatchingBlock, SequenceMatcher};
