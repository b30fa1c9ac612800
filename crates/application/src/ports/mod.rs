//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod chat_completion_port;
mod synthesizer_port;
mod transcriber_port;

#[cfg(test)]
pub use chat_completion_port::MockChatCompletionPort;
pub use chat_completion_port::{ChatCompletion, ChatCompletionPort, ChatCompletionRequest};
#[cfg(test)]
pub use synthesizer_port::MockSynthesizerPort;
pub use synthesizer_port::{SynthesisResult, SynthesizerPort, VoiceConfig};
#[cfg(test)]
pub use transcriber_port::MockTranscriberPort;
pub use transcriber_port::{TranscriberPort, TranscriptionRequest, TranscriptionResult};
