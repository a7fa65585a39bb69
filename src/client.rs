//! Exercise Log REST API Client
//!
//! HTTP client for the `/exercises` endpoints, used by the CLI.

use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::api::dto::{ExerciseRequest, HealthResponse};
use crate::api::error::ErrorResponse;
use crate::storage::{Exercise, NewExercise};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// REST API client for exercise records
#[derive(Clone)]
pub struct ExerciseClient {
    client: Client,
    base_url: String,
}

impl ExerciseClient {
    /// Create a client for the API at `base_url` (e.g. `http://localhost:8082`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self::with_client(client, base_url)
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The API base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /exercises
    pub async fn list(&self) -> Result<Vec<Exercise>, ClientError> {
        let response = self.client.get(self.url("/exercises")).send().await?;
        let response = expect_status(response, StatusCode::OK).await?;
        Ok(response.json().await?)
    }

    /// GET /exercises/:id
    pub async fn get(&self, id: &str) -> Result<Exercise, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/exercises/{}", id)))
            .send()
            .await?;
        let response = expect_status(response, StatusCode::OK).await?;
        Ok(response.json().await?)
    }

    /// POST /exercises
    pub async fn create(&self, new: &NewExercise) -> Result<Exercise, ClientError> {
        let response = self
            .client
            .post(self.url("/exercises"))
            .json(&ExerciseRequest::from(new))
            .send()
            .await?;
        let response = expect_status(response, StatusCode::CREATED).await?;
        Ok(response.json().await?)
    }

    /// PUT /exercises/:id (full-record replace)
    pub async fn replace(&self, id: &str, new: &NewExercise) -> Result<Exercise, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/exercises/{}", id)))
            .json(&ExerciseRequest::from(new))
            .send()
            .await?;
        let response = expect_status(response, StatusCode::OK).await?;
        Ok(response.json().await?)
    }

    /// DELETE /exercises/:id
    ///
    /// Only `204 No Content` counts as success.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/exercises/{}", id)))
            .send()
            .await?;
        expect_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    /// GET /health
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self.client.get(self.url("/health")).send().await?;
        let response = expect_status(response, StatusCode::OK).await?;
        Ok(response.json().await?)
    }
}

/// Turn any status other than `expected` into [`ClientError::Status`]
async fn expect_status(response: Response, expected: StatusCode) -> Result<Response, ClientError> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.error.message)
        .unwrap_or_else(|_| {
            if text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unexpected status")
                    .to_string()
            } else {
                text
            }
        });

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Exercise Log client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server answered {status}: {message}")]
    Status { status: u16, message: String },
}

impl ClientError {
    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Whether the server could not be reached at all
    pub fn is_connect(&self) -> bool {
        matches!(self, ClientError::Request(e) if e.is_connect() || e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{build_router, AppState};
    use crate::config::ApiConfig;
    use crate::storage::{ExerciseStore, Unit};
    use chrono::NaiveDate;

    async fn spawn_server() -> ExerciseClient {
        let store = ExerciseStore::in_memory().unwrap();
        let router = build_router(AppState::new(store, ApiConfig::default()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        ExerciseClient::new(format!("http://{}/", addr))
    }

    fn squat() -> NewExercise {
        NewExercise::new(
            "Squat",
            5,
            100.0,
            Unit::Lbs,
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_base_url_normalized() {
        let client = ExerciseClient::new("http://localhost:8082/");
        assert_eq!(client.base_url(), "http://localhost:8082");
        assert_eq!(client.url("/exercises"), "http://localhost:8082/exercises");
    }

    #[tokio::test]
    async fn test_create_list_delete_reload() {
        let client = spawn_server().await;

        let created = client.create(&squat()).await.unwrap();
        assert_eq!(client.list().await.unwrap(), vec![created.clone()]);

        client.delete(&created.id).await.unwrap();
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_rejected() {
        let client = spawn_server().await;

        let err = client.delete("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_replace_and_get() {
        let client = spawn_server().await;
        let created = client.create(&squat()).await.unwrap();

        let mut update = created.to_new();
        update.weight = 110.0;
        let replaced = client.replace(&created.id, &update).await.unwrap();
        assert_eq!(replaced.weight, 110.0);

        assert_eq!(client.get(&created.id).await.unwrap(), replaced);
    }

    #[tokio::test]
    async fn test_validation_error_message() {
        let client = spawn_server().await;

        let mut invalid = squat();
        invalid.reps = 0;
        let err = client.create(&invalid).await.unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("Reps must be at least 1"));
    }

    #[tokio::test]
    async fn test_health() {
        let client = spawn_server().await;
        let health = client.health().await.unwrap();
        assert_eq!(health.status, "healthy");
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ExerciseClient::new(format!("http://{}", addr));
        let err = client.list().await.unwrap_err();
        assert!(err.is_connect());
        assert_eq!(err.status(), None);
    }
}
