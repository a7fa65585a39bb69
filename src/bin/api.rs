//! Exercise Log API Server
//!
//! Run with: cargo run --bin exercise-log-api
//!
//! # Configuration
//!
//! Read from `--config <path>` or the default locations (see
//! `exercise_log::config`). Environment variables override file values:
//! - `EXERCISE_LOG_DATABASE`: SQLite database file
//! - `EXERCISE_LOG_HOST` / `EXERCISE_LOG_PORT`: bind address (default 0.0.0.0:8082)
//! - `EXERCISE_LOG_STATIC_DIR`: built front-end to serve
//! - `RUST_LOG`: Log filter (default: exercise_log=info,tower_http=debug)

use anyhow::Context;
use clap::Parser;
use exercise_log::api::{serve, AppState};
use exercise_log::config::Config;
use exercise_log::storage::ExerciseStore;
use exercise_log::telemetry;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exercise-log-api")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "REST API server for Exercise Log")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    telemetry::init_tracing(&config.logging).context("failed to initialize tracing")?;

    tracing::info!("Starting Exercise Log API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Database: {}", config.storage.database_path);

    let store = ExerciseStore::open(&config.storage.database_path)
        .with_context(|| format!("failed to open database {}", config.storage.database_path))?;
    tracing::info!(exercises = store.count()?, "Exercise store ready");

    if let Some(dir) = &config.api.static_dir {
        tracing::info!("Serving front-end from {}", dir);
    }

    let state = AppState::new(store, config.api.clone());

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Exercise Log API server stopped");

    Ok(())
}
