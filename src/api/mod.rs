//! Exercise Log REST API
//!
//! HTTP API layer for Exercise Log, built with Axum.
//!
//! # Endpoints
//!
//! ## Exercises
//! - `GET /exercises` - List all exercises
//! - `POST /exercises` - Create an exercise
//! - `GET /exercises/:id` - Get an exercise
//! - `PUT /exercises/:id` - Replace an exercise
//! - `DELETE /exercises/:id` - Delete an exercise (204 No Content)
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! When `static_dir` is configured, every other path is served from the
//! built front-end, falling back to its `index.html` for client-side routes.
//!
//! # Example
//!
//! ```rust,ignore
//! use exercise_log::api::{serve, AppState};
//! use exercise_log::config::ApiConfig;
//! use exercise_log::storage::ExerciseStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = ExerciseStore::open("./exercises.db")?;
//!     let config = ApiConfig::default();
//!
//!     serve(AppState::new(store, config.clone()), &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let exercise_routes = Router::new()
        .route(
            "/",
            get(routes::exercises::list_exercises).post(routes::exercises::create_exercise),
        )
        .route(
            "/:id",
            get(routes::exercises::get_exercise)
                .put(routes::exercises::replace_exercise)
                .delete(routes::exercises::delete_exercise),
        );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let static_dir = state.config.static_dir.clone();

    // Create shared state
    let shared_state = Arc::new(state);

    let mut router = Router::new()
        .nest("/exercises", exercise_routes)
        .nest("/health", health_routes);

    if let Some(dir) = static_dir {
        let index = Path::new(&dir).join("index.html");
        router = router.fallback_service(ServeDir::new(&dir).fallback(ServeFile::new(index)));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS policy: the configured origins, or permissive when none are listed
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Exercise Log API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Exercise Log API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::HealthResponse;
    use crate::api::error::ErrorResponse;
    use crate::storage::{Exercise, ExerciseStore};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    const SQUAT: &str =
        r#"{"name": "Squat", "reps": 5, "weight": 100, "unit": "lbs", "date": "2021-01-01"}"#;

    fn create_test_app() -> Router {
        let store = ExerciseStore::in_memory().unwrap();
        build_router(AppState::new(store, ApiConfig::default()))
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create(app: &Router, body: &str) -> Exercise {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/exercises", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        read_json(response).await
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = create_test_app();

        for uri in ["/health/live", "/health/ready"] {
            let response = app.clone().oneshot(empty_request("GET", uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = read_json(response).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.exercises, Some(0));
    }

    #[tokio::test]
    async fn test_list_exercises_empty() {
        let app = create_test_app();

        let response = app.oneshot(empty_request("GET", "/exercises")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let exercises: Vec<Exercise> = read_json(response).await;
        assert!(exercises.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_list_in_order() {
        let app = create_test_app();

        let squat = create(&app, SQUAT).await;
        let bench = create(
            &app,
            r#"{"name": "Bench", "reps": 8, "weight": 60.5, "unit": "kg", "date": "2021-01-02"}"#,
        )
        .await;
        assert_ne!(squat.id, bench.id);

        let response = app.oneshot(empty_request("GET", "/exercises")).await.unwrap();
        let exercises: Vec<Exercise> = read_json(response).await;
        assert_eq!(exercises, vec![squat, bench]);
    }

    #[tokio::test]
    async fn test_get_exercise() {
        let app = create_test_app();
        let squat = create(&app, SQUAT).await;

        let response = app
            .clone()
            .oneshot(empty_request("GET", &format!("/exercises/{}", squat.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: Exercise = read_json(response).await;
        assert_eq!(fetched, squat);

        let response = app
            .oneshot(empty_request("GET", "/exercises/missing"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_replace_exercise() {
        let app = create_test_app();
        let squat = create(&app, SQUAT).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/exercises/{}", squat.id),
                r#"{"name": "Squat", "reps": 3, "weight": 120, "unit": "lbs", "date": "2021-01-08"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let replaced: Exercise = read_json(response).await;
        assert_eq!(replaced.id, squat.id);
        assert_eq!(replaced.reps, 3);

        let response = app
            .oneshot(json_request("PUT", "/exercises/missing", SQUAT))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_exercise() {
        let app = create_test_app();
        let squat = create(&app, SQUAT).await;
        let uri = format!("/exercises/{}", squat.id);

        let response = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = read_json(response).await;
        assert_eq!(body.error.code, "NOT_FOUND");
        assert!(!body.request_id.is_empty());

        let response = app.oneshot(empty_request("GET", "/exercises")).await.unwrap();
        let exercises: Vec<Exercise> = read_json(response).await;
        assert!(exercises.is_empty());
    }

    #[tokio::test]
    async fn test_create_validation_error() {
        let app = create_test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/exercises",
                r#"{"name": "", "reps": 5, "weight": 100, "unit": "lbs", "date": "2021-01-01"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = read_json(response).await;
        assert_eq!(body.error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_invalid_json() {
        let app = create_test_app();

        let response = app
            .oneshot(json_request("POST", "/exercises", "not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_static_fallback_serves_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>exercise log</html>").unwrap();

        let config = ApiConfig {
            static_dir: Some(dir.path().to_string_lossy().to_string()),
            ..ApiConfig::default()
        };
        let app = build_router(AppState::new(ExerciseStore::in_memory().unwrap(), config));

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/edit-exercise"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<html>exercise log</html>");

        let response = app.oneshot(empty_request("GET", "/exercises")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
