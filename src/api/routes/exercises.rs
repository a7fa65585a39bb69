//! Exercise Routes
//!
//! CRUD endpoints for exercise records.
//!
//! - GET /exercises - List all exercises in insertion order
//! - POST /exercises - Create an exercise
//! - GET /exercises/:id - Get a specific exercise
//! - PUT /exercises/:id - Replace every field of an exercise
//! - DELETE /exercises/:id - Delete an exercise

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::ExerciseRequest;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::storage::Exercise;

/// GET /exercises
///
/// List all stored exercises.
pub async fn list_exercises(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Exercise>>> {
    let exercises = state.store.list()?;

    tracing::debug!(count = exercises.len(), "Listed exercises");

    Ok(Json(exercises))
}

/// GET /exercises/:id
pub async fn get_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Exercise>> {
    let exercise = state
        .store
        .get(&id)?
        .ok_or_else(|| ApiError::NotFound(format!("Exercise with id {} not found", id)))?;

    Ok(Json(exercise))
}

/// POST /exercises
///
/// Create a new exercise; the server assigns its id.
pub async fn create_exercise(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExerciseRequest>,
) -> ApiResult<(StatusCode, Json<Exercise>)> {
    let new = req.into_new_exercise()?;

    let exercise = state.store.create(new)?;

    tracing::info!(exercise_id = %exercise.id, name = %exercise.name, "Created exercise");

    Ok((StatusCode::CREATED, Json(exercise)))
}

/// PUT /exercises/:id
///
/// Full-record replace. The id in the path is authoritative.
pub async fn replace_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ExerciseRequest>,
) -> ApiResult<Json<Exercise>> {
    let new = req.into_new_exercise()?;

    let exercise = state.store.replace(&id, new)?;

    tracing::info!(exercise_id = %id, "Replaced exercise");

    Ok(Json(exercise))
}

/// DELETE /exercises/:id
///
/// Answers 204 No Content on success.
pub async fn delete_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.delete(&id)?;

    tracing::info!(exercise_id = %id, "Deleted exercise");

    Ok(StatusCode::NO_CONTENT)
}
