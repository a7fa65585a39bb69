//! # Exercise Log
//!
//! Workout tracking backend and tooling: a REST API over SQLite, a typed
//! HTTP client, and a terminal CLI. The browser front-end lives in the
//! `exercise-log-ui` crate and talks to the same REST surface.
//!
//! ## Modules
//!
//! - [`storage`]: SQLite-backed exercise store
//! - [`api`]: REST API server with Axum
//! - [`client`]: HTTP client for the REST API
//! - [`config`]: TOML + environment configuration
//! - [`telemetry`]: tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exercise_log::client::ExerciseClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ExerciseClient::new("http://localhost:8082");
//!
//!     for exercise in client.list().await? {
//!         println!("{} - {} reps", exercise.name, exercise.reps);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod storage;
pub mod telemetry;

// Re-export top-level types for convenience
pub use storage::{Exercise, ExerciseStore, NewExercise, StorageError, StorageResult, Unit};

pub use api::{build_router, serve, ApiError, AppState};

pub use client::{ClientError, ExerciseClient};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig, StorageConfig};
