//! HTTP API Client
//!
//! Browser implementation of [`ExerciseApi`] on top of `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::{error, log};
use serde::de::DeserializeOwned;
use web_sys::{AbortController, AbortSignal};

use super::{ApiError, ExerciseApi};
use crate::model::{Exercise, ExercisePayload};

/// Default API base URL: same origin as the page (Trunk proxies `/exercises`)
pub const DEFAULT_API_BASE: &str = "";

const API_URL_KEY: &str = "exercise_log_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// Exercise API over HTTP
///
/// A client created with [`HttpExerciseApi::for_view`] owns an abort
/// controller; calling [`HttpExerciseApi::abort`] cancels every request it
/// still has in flight.
pub struct HttpExerciseApi {
    base: String,
    abort: Option<AbortController>,
}

impl HttpExerciseApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            abort: None,
        }
    }

    /// Client bound to one view, using the configured base URL
    pub fn for_view() -> Self {
        let abort = AbortController::new()
            .map_err(|e| error!("Failed to create AbortController: {:?}", e))
            .ok();

        Self {
            abort,
            ..Self::new(get_api_base())
        }
    }

    /// Abort all in-flight requests
    pub fn abort(&self) {
        if let Some(controller) = &self.abort {
            controller.abort();
        }
    }

    fn signal(&self) -> Option<AbortSignal> {
        self.abort.as_ref().map(|controller| controller.signal())
    }

    fn is_aborted(&self) -> bool {
        self.signal().map(|signal| signal.aborted()).unwrap_or(false)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn exercise_url(&self, id: &str) -> String {
        self.url(&format!("/exercises/{}", id))
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        request.send().await.map_err(|e| self.network_error(e))
    }

    async fn send_json(
        &self,
        builder: RequestBuilder,
        payload: &ExercisePayload,
    ) -> Result<Response, ApiError> {
        let signal = self.signal();
        let request = builder
            .abort_signal(signal.as_ref())
            .json(payload)
            .map_err(|e| ApiError::Network(format!("Failed to encode request: {}", e)))?;
        self.send(request).await
    }

    fn network_error(&self, e: gloo_net::Error) -> ApiError {
        if self.is_aborted() {
            ApiError::Cancelled
        } else {
            ApiError::Network(e.to_string())
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        response.json().await.map_err(|e| {
            if self.is_aborted() {
                ApiError::Cancelled
            } else {
                ApiError::Decode(e.to_string())
            }
        })
    }
}

/// Turn any status other than `expected` into [`ApiError::Status`]
async fn expect_status(response: Response, expected: u16) -> Result<Response, ApiError> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.error.message)
        .unwrap_or_else(|_| {
            if text.is_empty() {
                response.status_text()
            } else {
                text
            }
        });

    Err(ApiError::Status { status, message })
}

#[async_trait(?Send)]
impl ExerciseApi for HttpExerciseApi {
    async fn list_exercises(&self) -> Result<Vec<Exercise>, ApiError> {
        let signal = self.signal();
        let request = Request::get(&self.url("/exercises"))
            .abort_signal(signal.as_ref())
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = expect_status(self.send(request).await?, 200).await?;
        let exercises: Vec<Exercise> = self.read_json(response).await?;
        log!("Loaded {} exercises", exercises.len());
        Ok(exercises)
    }

    async fn create_exercise(&self, payload: &ExercisePayload) -> Result<Exercise, ApiError> {
        let response = self
            .send_json(Request::post(&self.url("/exercises")), payload)
            .await?;
        let response = expect_status(response, 201).await?;
        self.read_json(response).await
    }

    async fn replace_exercise(
        &self,
        id: &str,
        payload: &ExercisePayload,
    ) -> Result<Exercise, ApiError> {
        let response = self
            .send_json(Request::put(&self.exercise_url(id)), payload)
            .await?;
        let response = expect_status(response, 200).await?;
        self.read_json(response).await
    }

    async fn delete_exercise(&self, id: &str) -> Result<(), ApiError> {
        let signal = self.signal();
        let request = Request::delete(&self.exercise_url(id))
            .abort_signal(signal.as_ref())
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        expect_status(self.send(request).await?, 204).await?;
        Ok(())
    }
}
