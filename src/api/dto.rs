//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::storage::{NewExercise, Unit};

// ============================================
// EXERCISE DTOs
// ============================================

/// Create or full-replace request body
///
/// Fields are kept loosely typed so that bad values produce a
/// `VALIDATION_ERROR` body instead of an extractor rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseRequest {
    pub name: String,
    pub reps: i64,
    pub weight: f64,
    pub unit: String,
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
}

impl ExerciseRequest {
    /// Convert into a validated record body
    pub fn into_new_exercise(self) -> ApiResult<NewExercise> {
        let reps = match u32::try_from(self.reps) {
            Ok(reps) => reps,
            Err(_) if self.reps < 0 => {
                return Err(ApiError::Validation("Reps must be at least 1".to_string()))
            }
            Err(_) => {
                return Err(ApiError::Validation(format!(
                    "Reps must be at most {}",
                    u32::MAX
                )))
            }
        };

        let unit: Unit = self.unit.parse().map_err(ApiError::Validation)?;

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            ApiError::Validation(format!(
                "Invalid date: {}. Use YYYY-MM-DD",
                self.date
            ))
        })?;

        let new = NewExercise {
            name: self.name.trim().to_string(),
            reps,
            weight: self.weight,
            unit,
            date,
        };

        new.validate().map_err(ApiError::Validation)?;

        Ok(new)
    }
}

impl From<&NewExercise> for ExerciseRequest {
    fn from(new: &NewExercise) -> Self {
        Self {
            name: new.name.clone(),
            reps: i64::from(new.reps),
            weight: new.weight,
            unit: new.unit.to_string(),
            date: new.date.format("%Y-%m-%d").to_string(),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Database status
    pub database: String,
    /// Number of stored exercises, when the database is reachable
    pub exercises: Option<usize>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ExerciseRequest {
        ExerciseRequest {
            name: "  Squat ".to_string(),
            reps: 5,
            weight: 100.0,
            unit: "lbs".to_string(),
            date: "2021-01-01".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        let new = request().into_new_exercise().unwrap();
        assert_eq!(new.name, "Squat");
        assert_eq!(new.unit, Unit::Lbs);
        assert_eq!(new.date, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    }

    #[test]
    fn test_invalid_fields() {
        let negative_reps = ExerciseRequest { reps: -3, ..request() };
        assert!(matches!(
            negative_reps.into_new_exercise(),
            Err(ApiError::Validation(_))
        ));

        let bad_unit = ExerciseRequest {
            unit: "stone".to_string(),
            ..request()
        };
        assert!(bad_unit.into_new_exercise().is_err());

        let bad_date = ExerciseRequest {
            date: "01-01-21".to_string(),
            ..request()
        };
        assert!(bad_date.into_new_exercise().is_err());

        let empty_name = ExerciseRequest {
            name: String::new(),
            ..request()
        };
        assert!(empty_name.into_new_exercise().is_err());
    }

    #[test]
    fn test_reps_out_of_range_messages() {
        let too_many = ExerciseRequest {
            reps: 5_000_000_000,
            ..request()
        };
        match too_many.into_new_exercise() {
            Err(ApiError::Validation(message)) => {
                assert_eq!(message, format!("Reps must be at most {}", u32::MAX))
            }
            other => panic!("expected validation error, got {:?}", other.map(|n| n.reps)),
        }

        let negative = ExerciseRequest { reps: -1, ..request() };
        match negative.into_new_exercise() {
            Err(ApiError::Validation(message)) => assert_eq!(message, "Reps must be at least 1"),
            other => panic!("expected validation error, got {:?}", other.map(|n| n.reps)),
        }
    }

    #[test]
    fn test_from_new_exercise() {
        let new = request().into_new_exercise().unwrap();
        let back = ExerciseRequest::from(&new);
        assert_eq!(back.date, "2021-01-01");
        assert_eq!(back.unit, "lbs");
    }
}
