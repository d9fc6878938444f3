//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Wrong primitive types and missing required fields are rejected by serde
//! before `validate()` ever runs; the rules below cover ranges and formats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use fitness_core::{posture, SessionStatus};

// ============================================================================
// Member Requests
// ============================================================================

/// Create member request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Avatar URL; blank is treated as absent
    pub avatar: Option<String>,

    /// Defaults to true
    pub is_active: Option<bool>,
}

/// Update member request
///
/// `id` and `joinedAt` are not part of the schema and are dropped if sent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// Absent leaves the avatar alone; `null` or blank clears it
    #[serde(default, deserialize_with = "present")]
    pub avatar: Option<Option<String>>,

    pub is_active: Option<bool>,
}

// ============================================================================
// Exercise Requests
// ============================================================================

/// Create exercise request (every field required)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    pub description: String,

    pub category: String,

    pub difficulty: String,

    #[validate(range(exclusive_min = 0.0, message = "caloriesPerMinute must be positive"))]
    pub calories_per_minute: f64,

    pub proper_form_tips: Vec<String>,

    pub common_mistakes: Vec<String>,
}

/// Update exercise request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExerciseRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub category: Option<String>,

    pub difficulty: Option<String>,

    #[validate(range(exclusive_min = 0.0, message = "caloriesPerMinute must be positive"))]
    pub calories_per_minute: Option<f64>,

    pub proper_form_tips: Option<Vec<String>>,

    pub common_mistakes: Option<Vec<String>>,
}

// ============================================================================
// Session Requests
// ============================================================================

/// Start session request
///
/// Server-owned fields (`status`, `postureScores`, `startTime`, `endTime`,
/// `duration`) are not part of the schema; a new session always starts
/// `in_progress` with no samples.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[validate(length(min = 1, message = "memberId must not be empty"))]
    pub member_id: String,

    #[validate(length(min = 1, message = "exerciseId must not be empty"))]
    pub exercise_id: String,

    pub reps: Option<u32>,

    #[validate(range(min = 0.0, message = "caloriesBurned must not be negative"))]
    pub calories_burned: Option<f64>,

    #[validate(range(
        min = 0.0,
        max = 100.0,
        message = "averagePostureAccuracy must be between 0 and 100"
    ))]
    pub average_posture_accuracy: Option<f64>,
}

/// Update session request
///
/// Only the mutable fields are accepted; anything else (including `id`,
/// `memberId` and `startTime`) is rejected.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateSessionRequest {
    /// RFC 3339 timestamp
    pub end_time: Option<DateTime<Utc>>,

    /// Seconds
    pub duration: Option<u32>,

    pub reps: Option<u32>,

    #[validate(range(min = 0.0, message = "caloriesBurned must not be negative"))]
    pub calories_burned: Option<f64>,

    #[validate(range(
        min = 0.0,
        max = 100.0,
        message = "averagePostureAccuracy must be between 0 and 100"
    ))]
    pub average_posture_accuracy: Option<f64>,

    /// Replaces the stored samples
    #[validate(custom(function = "validate_posture_scores"))]
    pub posture_scores: Option<Vec<f64>>,

    pub status: Option<SessionStatus>,
}

/// Mark a field as present even when its value is `null`
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn validate_posture_scores(scores: &[f64]) -> Result<(), ValidationError> {
    let Some(index) = posture::first_invalid(scores) else {
        return Ok(());
    };

    let mut err = ValidationError::new("posture_score_range");
    err.message = Some(format!("postureScores[{index}] must be between 0 and 100").into());
    err.add_param("index".into(), &index);
    Err(err)
}
