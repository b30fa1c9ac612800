//! Exercise catalog configuration.

use application::ExerciseSelection;
use domain::{DomainError, Exercise, ExerciseCatalog};
use serde::{Deserialize, Serialize};

/// Exercise catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseAppConfig {
    /// How `/exercise` picks an item
    #[serde(default)]
    pub selection: ExerciseSelection,

    /// Custom catalog; the built-in beginner phrases are used when empty
    #[serde(default)]
    pub items: Vec<Exercise>,
}

impl ExerciseAppConfig {
    /// Build the catalog described by this configuration
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` for blank ids or texts and
    /// duplicate ids.
    pub fn catalog(&self) -> Result<ExerciseCatalog, DomainError> {
        if self.items.is_empty() {
            return Ok(ExerciseCatalog::default());
        }

        let exercises = self
            .items
            .iter()
            .map(|item| {
                let exercise = Exercise::new(item.id.as_str(), item.text.as_str())?;
                Ok(match &item.reference_audio_url {
                    Some(url) => exercise.with_reference_audio(url.as_str()),
                    None => exercise,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        ExerciseCatalog::new(exercises)
    }
}
