//! Exercise record types as seen by the front-end
//!
//! Values are passed through exactly as the server sends them; `unit` and
//! `date` stay strings so nothing is reinterpreted on the way to the table.

use serde::{Deserialize, Serialize};

/// Units offered by the form
pub const UNITS: [&str; 2] = ["lbs", "kg"];

/// An exercise record from the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub reps: u32,
    pub weight: f64,
    pub unit: String,
    pub date: String,
}

impl Exercise {
    /// Weight with its unit, e.g. `100 lbs`
    pub fn weight_label(&self) -> String {
        format!("{} {}", self.weight, self.unit)
    }
}

/// Body of a create or full-replace request
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExercisePayload {
    pub name: String,
    pub reps: u32,
    pub weight: f64,
    pub unit: String,
    pub date: String,
}

/// Form contents while the user is typing
///
/// Numeric fields stay text until submission.
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseDraft {
    pub name: String,
    pub reps: String,
    pub weight: String,
    pub unit: String,
    pub date: String,
}

impl ExerciseDraft {
    /// Empty draft dated today
    pub fn for_today() -> Self {
        Self {
            name: String::new(),
            reps: String::new(),
            weight: String::new(),
            unit: UNITS[0].to_string(),
            date: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
        }
    }

    /// Draft prefilled from an existing record
    pub fn from_exercise(exercise: &Exercise) -> Self {
        Self {
            name: exercise.name.clone(),
            reps: exercise.reps.to_string(),
            weight: exercise.weight.to_string(),
            unit: exercise.unit.clone(),
            date: exercise.date.clone(),
        }
    }

    /// Convert to a request body; fails only when a number does not parse
    pub fn to_payload(&self) -> Result<ExercisePayload, String> {
        let reps = self
            .reps
            .trim()
            .parse()
            .map_err(|_| format!("Reps must be a whole number, got '{}'", self.reps))?;
        let weight = self
            .weight
            .trim()
            .parse()
            .map_err(|_| format!("Weight must be a number, got '{}'", self.weight))?;

        Ok(ExercisePayload {
            name: self.name.clone(),
            reps,
            weight,
            unit: self.unit.clone(),
            date: self.date.clone(),
        })
    }
}
