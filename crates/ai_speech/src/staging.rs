//! Scoped on-disk staging of uploads
//!
//! Some provider SDK flows expect a file on disk. [`StagedAudio`] owns such a
//! file for exactly as long as the value lives: the file is removed when the
//! guard is dropped, whichever way the surrounding flow exits.

use std::path::Path;

use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::SpeechError;
use crate::types::{AudioData, AudioFormat};

const STAGING_PREFIX: &str = "natiq-upload-";

/// Audio written to a temporary file that is deleted on drop
#[derive(Debug)]
pub struct StagedAudio {
    file: NamedTempFile,
    format: AudioFormat,
}

impl StagedAudio {
    /// Write `audio` to a fresh temporary file in `dir` (system temp dir when `None`)
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Staging` if the file cannot be created or written.
    pub async fn stage(audio: &AudioData, dir: Option<&Path>) -> Result<Self, SpeechError> {
        let suffix = format!(".{}", audio.format().extension());
        let mut builder = tempfile::Builder::new();
        builder.prefix(STAGING_PREFIX).suffix(&suffix);
        let file = match dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(|e| SpeechError::Staging(format!("Failed to create temp file: {e}")))?;

        let mut handle = tokio::fs::OpenOptions::new()
            .write(true)
            .open(file.path())
            .await
            .map_err(|e| SpeechError::Staging(format!("Failed to open temp file: {e}")))?;
        handle
            .write_all(audio.data())
            .await
            .map_err(|e| SpeechError::Staging(format!("Failed to write audio data: {e}")))?;
        handle
            .flush()
            .await
            .map_err(|e| SpeechError::Staging(format!("Failed to flush temp file: {e}")))?;

        debug!(path = %file.path().display(), size = audio.size_bytes(), "Staged upload");

        Ok(Self {
            file,
            format: audio.format(),
        })
    }

    /// Location of the staged file
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the staged bytes back for upload
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Staging` if the file cannot be read.
    pub async fn read(&self) -> Result<AudioData, SpeechError> {
        let data = tokio::fs::read(self.path())
            .await
            .map_err(|e| SpeechError::Staging(format!("Failed to read staged audio: {e}")))?;
        Ok(AudioData::new(data, self.format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn staged_file_holds_audio_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let audio = AudioData::new(vec![1, 2, 3, 4, 5], AudioFormat::Wav);

        let staged = StagedAudio::stage(&audio, Some(dir.path())).await.unwrap();

        assert!(staged.path().exists());
        assert!(staged.path().starts_with(dir.path()));
        assert_eq!(
            staged.path().extension().and_then(|e| e.to_str()),
            Some("wav")
        );
        assert_eq!(std::fs::read(staged.path()).unwrap(), vec![1, 2, 3, 4, 5]);

        let read_back = staged.read().await.unwrap();
        assert_eq!(read_back.data(), &[1, 2, 3, 4, 5]);
        assert_eq!(read_back.format(), AudioFormat::Wav);
    }

    #[tokio::test]
    async fn file_is_deleted_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let audio = AudioData::new(vec![0; 16], AudioFormat::Webm);

        let staged = StagedAudio::stage(&audio, Some(dir.path())).await.unwrap();
        let path = staged.path().to_path_buf();
        assert!(path.exists());

        drop(staged);

        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn file_is_deleted_when_flow_errors() {
        async fn failing_flow(dir: &Path) -> Result<(), SpeechError> {
            let audio = AudioData::new(vec![0; 16], AudioFormat::Wav);
            let _staged = StagedAudio::stage(&audio, Some(dir)).await?;
            Err(SpeechError::TranscriptionFailed("provider down".to_string()))
        }

        let dir = tempfile::tempdir().unwrap();
        assert!(failing_flow(dir.path()).await.is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn staging_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let audio = AudioData::new(vec![0; 4], AudioFormat::Wav);

        let result = StagedAudio::stage(&audio, Some(&missing)).await;

        assert!(matches!(result, Err(SpeechError::Staging(_))));
    }
}
