//! Domain layer for Natiq
//!
//! Contains the pronunciation scoring rules, practice exercises, audio clips
//! and domain errors. This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod pronunciation;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use pronunciation::{normalize_arabic, score_attempt, similarity_ratio, ScoreResult};
pub use value_objects::*;
