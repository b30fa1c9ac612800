//! AI Speech - Speech-to-Text and Text-to-Speech providers
//!
//! Provides traits and implementations for speech processing:
//! - `SpeechToText` - Transcribe audio to text (STT)
//! - `TextToSpeech` - Synthesize speech from text (TTS)
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Supported Providers
//!
//! - OpenAI transcription (`gpt-4o-transcribe`) and speech (`gpt-4o-mini-tts`)
//! - ElevenLabs Scribe transcription
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{AudioData, AudioFormat, OpenAISpeechProvider, SpeechToText, TranscriptionOptions};
//!
//! let provider = OpenAISpeechProvider::new(config)?;
//!
//! let audio = AudioData::new(bytes, AudioFormat::Wav);
//! let options = TranscriptionOptions::new().with_language("ar");
//! let transcription = provider.transcribe(audio, &options).await?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod staging;
pub mod types;

pub use config::{ElevenLabsConfig, SpeechConfig};
pub use error::SpeechError;
pub use ports::{SpeechToText, TextToSpeech};
pub use providers::{ElevenLabsScribeProvider, OpenAISpeechProvider};
pub use staging::StagedAudio;
pub use types::{AudioData, AudioFormat, SynthesisOptions, Transcription, TranscriptionOptions};
