//! Value Objects - Immutable, identity-less domain primitives

mod feedback;
mod score;

pub use feedback::Feedback;
pub use score::{InvalidScore, Score};
