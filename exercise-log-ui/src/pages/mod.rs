//! Pages
//!
//! Top-level page components for each route.

pub mod exercise_form;
pub mod home;

pub use exercise_form::{CreateExercisePage, EditExercisePage};
pub use home::HomePage;
