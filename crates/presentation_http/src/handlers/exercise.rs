//! Exercise handler

use axum::{Json, extract::State};
use domain::Exercise;
use tracing::debug;

use crate::state::AppState;

/// Hand out the next practice phrase
pub async fn next_exercise(State(state): State<AppState>) -> Json<Exercise> {
    let exercise = state.exercises.next_exercise();
    debug!(id = %exercise.id, "Serving exercise");
    Json(exercise)
}
