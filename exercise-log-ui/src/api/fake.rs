//! In-memory [`ExerciseApi`] for page tests

use async_trait::async_trait;
use std::cell::{Cell, RefCell};

use super::{ApiError, ExerciseApi};
use crate::model::{Exercise, ExercisePayload};

/// Fake server that records each request as `METHOD path`
///
/// Every request yields once before answering, so joined callers interleave
/// the way overlapping browser requests would.
#[derive(Default)]
pub struct FakeExerciseApi {
    exercises: RefCell<Vec<Exercise>>,
    requests: RefCell<Vec<String>>,
    next_id: Cell<u32>,
    /// Answer every DELETE with this status instead of 204
    pub delete_status: Cell<Option<u16>>,
    /// Fail every request before it reaches the "server"
    pub offline: Cell<bool>,
    /// Runs after a request is recorded, before it completes
    pub on_request: RefCell<Option<Box<dyn Fn()>>>,
}

impl FakeExerciseApi {
    pub fn with_exercises(exercises: Vec<Exercise>) -> Self {
        let api = Self::default();
        api.next_id.set(exercises.len() as u32);
        *api.exercises.borrow_mut() = exercises;
        api
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn stored(&self) -> Vec<Exercise> {
        self.exercises.borrow().clone()
    }

    fn record(&self, request: String) -> Result<(), ApiError> {
        self.requests.borrow_mut().push(request);
        if let Some(hook) = self.on_request.borrow().as_ref() {
            hook();
        }
        if self.offline.get() {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }

    fn not_found(id: &str) -> ApiError {
        ApiError::Status {
            status: 404,
            message: format!("Exercise not found: {}", id),
        }
    }
}

fn from_payload(id: String, payload: &ExercisePayload) -> Exercise {
    Exercise {
        id,
        name: payload.name.clone(),
        reps: payload.reps,
        weight: payload.weight,
        unit: payload.unit.clone(),
        date: payload.date.clone(),
    }
}

#[async_trait(?Send)]
impl ExerciseApi for FakeExerciseApi {
    async fn list_exercises(&self) -> Result<Vec<Exercise>, ApiError> {
        self.record("GET /exercises".to_string())?;
        tokio::task::yield_now().await;
        Ok(self.stored())
    }

    async fn create_exercise(&self, payload: &ExercisePayload) -> Result<Exercise, ApiError> {
        self.record("POST /exercises".to_string())?;
        tokio::task::yield_now().await;
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let exercise = from_payload(id.to_string(), payload);
        self.exercises.borrow_mut().push(exercise.clone());
        Ok(exercise)
    }

    async fn replace_exercise(
        &self,
        id: &str,
        payload: &ExercisePayload,
    ) -> Result<Exercise, ApiError> {
        self.record(format!("PUT /exercises/{}", id))?;
        tokio::task::yield_now().await;
        let mut exercises = self.exercises.borrow_mut();
        let slot = exercises
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = from_payload(id.to_string(), payload);
        Ok(slot.clone())
    }

    async fn delete_exercise(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /exercises/{}", id))?;
        tokio::task::yield_now().await;
        if let Some(status) = self.delete_status.get() {
            return Err(ApiError::Status {
                status,
                message: "rejected".to_string(),
            });
        }

        let mut exercises = self.exercises.borrow_mut();
        let before = exercises.len();
        exercises.retain(|e| e.id != id);
        if exercises.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
