//! Core data types for exercise records
//!
//! Defines the fundamental types used throughout Exercise Log:
//! - [`Exercise`]: A stored exercise record with its server-assigned id
//! - [`NewExercise`]: The writable fields of a record (create and full replace)
//! - [`Unit`]: Weight unit

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of an exercise name
pub const MAX_NAME_LEN: usize = 100;

/// Weight unit of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Kilograms
    Kg,
    /// Pounds
    Lbs,
}

impl Unit {
    /// Wire and database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kgs" => Ok(Unit::Kg),
            "lb" | "lbs" => Ok(Unit::Lbs),
            other => Err(format!("Invalid unit: {}. Use kg or lbs", other)),
        }
    }
}

/// A stored exercise record
///
/// The `id` is assigned by the server on creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub reps: u32,
    pub weight: f64,
    pub unit: Unit,
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl Exercise {
    /// Attach an id to a set of writable fields
    pub fn from_new(id: impl Into<String>, new: NewExercise) -> Self {
        Self {
            id: id.into(),
            name: new.name,
            reps: new.reps,
            weight: new.weight,
            unit: new.unit,
            date: new.date,
        }
    }

    /// The writable fields of this record
    pub fn to_new(&self) -> NewExercise {
        NewExercise {
            name: self.name.clone(),
            reps: self.reps,
            weight: self.weight,
            unit: self.unit,
            date: self.date,
        }
    }
}

/// Writable fields of an exercise (create and full-record replace)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExercise {
    pub name: String,
    pub reps: u32,
    pub weight: f64,
    pub unit: Unit,
    pub date: NaiveDate,
}

impl NewExercise {
    /// Create a new record body
    pub fn new(name: impl Into<String>, reps: u32, weight: f64, unit: Unit, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            reps,
            weight,
            unit,
            date,
        }
    }

    /// Check the fields the server enforces
    ///
    /// Returns a human-readable reason on the first violation.
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Exercise name cannot be empty".to_string());
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(format!(
                "Exercise name exceeds maximum length of {} characters",
                MAX_NAME_LEN
            ));
        }
        if self.reps == 0 {
            return Err("Reps must be at least 1".to_string());
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err("Weight must be a non-negative number".to_string());
        }
        Ok(())
    }
}
