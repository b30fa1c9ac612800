//! Domain entities

mod audio_clip;
mod exercise;

pub use audio_clip::{AudioClip, AudioFormat};
pub use exercise::{Exercise, ExerciseCatalog};
