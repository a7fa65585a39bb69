//! Exercise API access
//!
//! Pages talk to the server through [`ExerciseApi`] so their logic can run
//! against an in-memory fake in tests. [`client::HttpExerciseApi`] is the
//! browser implementation.

pub mod client;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use std::rc::Rc;
use thiserror::Error;

use crate::model::{Exercise, ExercisePayload};

pub use client::HttpExerciseApi;

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with an unexpected status
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not what we expected
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The owning view went away and the request was aborted
    #[error("Request cancelled")]
    Cancelled,
}

/// The `/exercises` REST surface
#[async_trait(?Send)]
pub trait ExerciseApi {
    /// `GET /exercises`
    async fn list_exercises(&self) -> Result<Vec<Exercise>, ApiError>;

    /// `POST /exercises`
    async fn create_exercise(&self, payload: &ExercisePayload) -> Result<Exercise, ApiError>;

    /// `PUT /exercises/{id}`, a full-record replace
    async fn replace_exercise(
        &self,
        id: &str,
        payload: &ExercisePayload,
    ) -> Result<Exercise, ApiError>;

    /// `DELETE /exercises/{id}`
    ///
    /// Only a 204 counts as success; any other status is [`ApiError::Status`].
    async fn delete_exercise(&self, id: &str) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl<T: ExerciseApi + ?Sized> ExerciseApi for Rc<T> {
    async fn list_exercises(&self) -> Result<Vec<Exercise>, ApiError> {
        (**self).list_exercises().await
    }

    async fn create_exercise(&self, payload: &ExercisePayload) -> Result<Exercise, ApiError> {
        (**self).create_exercise(payload).await
    }

    async fn replace_exercise(
        &self,
        id: &str,
        payload: &ExercisePayload,
    ) -> Result<Exercise, ApiError> {
        (**self).replace_exercise(id, payload).await
    }

    async fn delete_exercise(&self, id: &str) -> Result<(), ApiError> {
        (**self).delete_exercise(id).await
    }
}
