//! Exercise service - Chooses the next phrase to practise

use domain::{Exercise, ExerciseCatalog};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the next exercise is picked from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseSelection {
    /// Always serve the first exercise
    #[default]
    First,
    /// Pick uniformly at random
    Random,
}

/// Serves practice exercises
#[derive(Debug, Clone)]
pub struct ExerciseService {
    catalog: ExerciseCatalog,
    selection: ExerciseSelection,
}

impl Default for ExerciseService {
    fn default() -> Self {
        Self::new(ExerciseCatalog::default(), ExerciseSelection::default())
    }
}

impl ExerciseService {
    pub const fn new(catalog: ExerciseCatalog, selection: ExerciseSelection) -> Self {
        Self { catalog, selection }
    }

    pub const fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    /// The exercise to present next
    #[must_use]
    pub fn next_exercise(&self) -> Exercise {
        let exercise = match self.selection {
            ExerciseSelection::First => self.catalog.first(),
            ExerciseSelection::Random => {
                let index = rand::rng().random_range(0..self.catalog.len());
                self.catalog.get(index).unwrap_or_else(|| self.catalog.first())
            },
        };
        debug!(id = %exercise.id, selection = ?self.selection, "Serving exercise");
        exercise.clone()
    }
}
