//! Exercise Log Storage
//!
//! This module provides persistence for exercise records:
//!
//! - **types**: Core data structures (Exercise, NewExercise, Unit)
//! - **store**: SQLite-backed store
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use exercise_log::storage::{ExerciseStore, NewExercise, Unit};
//! use chrono::NaiveDate;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = ExerciseStore::open("./exercises.db")?;
//!
//!     let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
//!     let squat = store.create(NewExercise::new("Squat", 5, 100.0, Unit::Lbs, date))?;
//!
//!     for exercise in store.list()? {
//!         println!("{} {} x{}", exercise.date, exercise.name, exercise.reps);
//!     }
//!
//!     store.delete(&squat.id)?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use store::ExerciseStore;
pub use types::{Exercise, NewExercise, Unit, MAX_NAME_LEN};
