//! Practice exercises

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A phrase the learner is asked to pronounce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    /// Reference text in Arabic script
    pub text: String,
    /// Pre-recorded reference audio; clients synthesize it when absent
    pub reference_audio_url: Option<String>,
}

impl Exercise {
    /// Create an exercise without reference audio
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the id or text is blank.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let text = text.into();
        if id.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "exercise id must not be empty".to_string(),
            ));
        }
        if text.trim().is_empty() {
            return Err(DomainError::ValidationError(format!(
                "exercise '{id}' has no text"
            )));
        }
        Ok(Self {
            id,
            text,
            reference_audio_url: None,
        })
    }

    /// Attach a reference audio URL
    #[must_use]
    pub fn with_reference_audio(mut self, url: impl Into<String>) -> Self {
        self.reference_audio_url = Some(url.into());
        self
    }
}

/// An ordered, non-empty list of exercises
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
}

impl ExerciseCatalog {
    /// Build a catalog
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the list is empty or ids repeat.
    pub fn new(exercises: Vec<Exercise>) -> Result<Self, DomainError> {
        if exercises.is_empty() {
            return Err(DomainError::ValidationError(
                "exercise catalog must not be empty".to_string(),
            ));
        }
        for (index, exercise) in exercises.iter().enumerate() {
            if exercises[..index].iter().any(|e| e.id == exercise.id) {
                return Err(DomainError::ValidationError(format!(
                    "duplicate exercise id '{}'",
                    exercise.id
                )));
            }
        }
        Ok(Self { exercises })
    }

    /// The exercise served when no selection strategy is configured
    #[must_use]
    pub fn first(&self) -> &Exercise {
        &self.exercises[0]
    }

    /// Exercise at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Exercise> {
        self.exercises.get(index)
    }

    /// Look up an exercise by id
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` for unknown ids.
    pub fn find(&self, id: &str) -> Result<&Exercise, DomainError> {
        self.exercises
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| DomainError::not_found("Exercise", id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Catalogs built through [`Self::new`] or `default` are never empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter()
    }
}

impl Default for ExerciseCatalog {
    /// Beginner greetings, starting with "hello world"
    fn default() -> Self {
        let exercise = |id: &str, text: &str| Exercise {
            id: id.to_string(),
            text: text.to_string(),
            reference_audio_url: None,
        };
        Self {
            exercises: vec![
                exercise("ex_1", "مرحبا بالعالم"),
                exercise("ex_2", "شكرا"),
                exercise("ex_3", "كيف حالك"),
                exercise("ex_4", "أنا بخير"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_starts_with_hello_world() {
        let catalog = ExerciseCatalog::default();
        let first = catalog.first();
        assert_eq!(first.id, "ex_1");
        assert_eq!(first.text, "مرحبا بالعالم");
        assert!(first.reference_audio_url.is_none());
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn exercise_rejects_blank_fields() {
        assert!(Exercise::new("", "شكرا").is_err());
        assert!(Exercise::new("ex_9", "   ").is_err());
        assert!(Exercise::new("ex_9", "شكرا").is_ok());
    }

    #[test]
    fn with_reference_audio_sets_url() {
        let exercise = Exercise::new("ex_9", "شكرا")
            .unwrap()
            .with_reference_audio("https://cdn.example/shukran.mp3");
        assert_eq!(
            exercise.reference_audio_url.as_deref(),
            Some("https://cdn.example/shukran.mp3")
        );
    }

    #[test]
    fn catalog_rejects_empty_list() {
        assert!(ExerciseCatalog::new(Vec::new()).is_err());
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let a = Exercise::new("ex_1", "شكرا").unwrap();
        let b = Exercise::new("ex_1", "مرحبا").unwrap();
        let err = ExerciseCatalog::new(vec![a, b]).unwrap_err();
        assert!(err.to_string().contains("duplicate exercise id 'ex_1'"));
    }

    #[test]
    fn find_by_id() {
        let catalog = ExerciseCatalog::default();
        assert_eq!(catalog.find("ex_2").unwrap().text, "شكرا");
        assert!(matches!(
            catalog.find("ex_404"),
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn get_by_index() {
        let catalog = ExerciseCatalog::default();
        assert_eq!(catalog.get(3).map(|e| e.id.as_str()), Some("ex_4"));
        assert!(catalog.get(4).is_none());
    }

    #[test]
    fn serializes_null_reference_audio() {
        let json = serde_json::to_value(ExerciseCatalog::default().first()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "ex_1",
                "text": "مرحبا بالعالم",
                "reference_audio_url": null
            })
        );
    }
}
