//! OpenAI chat-completions integration

mod client;

pub use client::OpenAIChatEngine;
