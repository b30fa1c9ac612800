//! Service wiring
//!
//! Builds the application services from an [`AppConfig`]. A flow whose
//! provider credentials are missing is not fatal: it is registered as
//! [`Provisioned::Unconfigured`] and reports a configuration error on use.

use std::sync::Arc;

use application::{
    ApplicationError, AttemptService, ExerciseService, VoiceChatConfig, VoiceChatService,
    VoiceConfig,
};
use tracing::{info, warn};

use crate::adapters::{ChatCompletionAdapter, SpeechSynthesizerAdapter, SpeechTranscriberAdapter};
use crate::config::AppConfig;

/// A service that may be unavailable because it is not configured
#[derive(Debug)]
pub enum Provisioned<T> {
    Ready(Arc<T>),
    /// The configuration error to report on every use
    Unconfigured(String),
}

impl<T> Clone for Provisioned<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Ready(service) => Self::Ready(Arc::clone(service)),
            Self::Unconfigured(reason) => Self::Unconfigured(reason.clone()),
        }
    }
}

impl<T> Provisioned<T> {
    /// Wrap a construction result, keeping configuration failures for later
    ///
    /// # Errors
    ///
    /// Any error other than `ApplicationError::Configuration` is returned.
    pub fn from_result(result: Result<T, ApplicationError>) -> Result<Self, ApplicationError> {
        match result {
            Ok(service) => Ok(Self::Ready(Arc::new(service))),
            Err(ApplicationError::Configuration(reason)) => Ok(Self::Unconfigured(reason)),
            Err(e) => Err(e),
        }
    }

    /// The service, or the configuration error explaining its absence
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the service is unconfigured.
    pub fn get(&self) -> Result<&Arc<T>, ApplicationError> {
        match self {
            Self::Ready(service) => Ok(service),
            Self::Unconfigured(reason) => Err(ApplicationError::Configuration(reason.clone())),
        }
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// All services the HTTP layer needs
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    /// Pronunciation scoring (ElevenLabs transcription)
    pub attempt: Provisioned<AttemptService>,
    /// Tutor conversation (OpenAI transcription, chat and speech)
    pub voice_chat: Provisioned<VoiceChatService>,
    pub exercises: Arc<ExerciseService>,
}

/// Build every service from configuration
///
/// # Errors
///
/// Returns an error if the exercise catalog or the retry policy is invalid.
/// Missing provider keys only disable the affected flow.
pub fn build_services(config: &AppConfig) -> Result<ServiceRegistry, ApplicationError> {
    config
        .retry
        .validate()
        .map_err(ApplicationError::Configuration)?;

    let catalog = config.exercises.catalog()?;
    let exercises = Arc::new(ExerciseService::new(catalog, config.exercises.selection));

    let attempt = Provisioned::from_result(build_attempt_service(config))?;
    let voice_chat = Provisioned::from_result(build_voice_chat_service(config))?;

    log_flow("attempt", &attempt);
    log_flow("voice_chat", &voice_chat);
    info!(
        exercises = exercises.catalog().len(),
        selection = ?config.exercises.selection,
        "Services initialized"
    );

    Ok(ServiceRegistry {
        attempt,
        voice_chat,
        exercises,
    })
}

fn build_attempt_service(config: &AppConfig) -> Result<AttemptService, ApplicationError> {
    let transcriber =
        SpeechTranscriberAdapter::elevenlabs(config.elevenlabs.clone(), config.retry.clone())?;
    Ok(AttemptService::new(Arc::new(transcriber)))
}

fn build_voice_chat_service(config: &AppConfig) -> Result<VoiceChatService, ApplicationError> {
    let transcriber = SpeechTranscriberAdapter::openai(config.speech.clone(), config.retry.clone())?;
    let chat = ChatCompletionAdapter::openai(config.inference.clone(), config.retry.clone())?;
    let synthesizer =
        SpeechSynthesizerAdapter::openai(config.speech.clone(), config.retry.clone())?;

    let voice_config = VoiceChatConfig {
        temperature: config.inference.temperature,
        voice: VoiceConfig {
            voice_id: config.speech.default_voice.clone(),
            speed: config.speech.speed,
        },
        ..VoiceChatConfig::default()
    };

    Ok(VoiceChatService::with_config(
        Arc::new(transcriber),
        Arc::new(chat),
        Arc::new(synthesizer),
        voice_config,
    ))
}

fn log_flow<T>(flow: &str, service: &Provisioned<T>) {
    match service {
        Provisioned::Ready(_) => info!(flow, "Flow ready"),
        Provisioned::Unconfigured(reason) => warn!(flow, %reason, "Flow disabled"),
    }
}
