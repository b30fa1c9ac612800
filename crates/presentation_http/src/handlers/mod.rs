//! HTTP request handlers

pub mod attempt;
pub mod exercise;
pub mod health;
pub mod voice_chat;
