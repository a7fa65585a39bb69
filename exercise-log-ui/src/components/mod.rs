//! UI Components
//!
//! Reusable Leptos components for the exercise pages.

pub mod exercise_table;
pub mod loading;
pub mod nav;
pub mod toast;

pub use exercise_table::ExerciseTable;
pub use loading::{InlineLoading, ListSkeleton};
pub use nav::Navigation;
pub use toast::Toast;
