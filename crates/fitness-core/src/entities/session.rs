//! Workout session entity - one member performing one exercise

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::RecordId;

/// Lifecycle status of a workout session
///
/// ```text
/// in_progress <-> paused
///      |            |
///      +--> completed <--+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    InProgress,
    Completed,
    Paused,
}

impl SessionStatus {
    /// Wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Paused => "paused",
        }
    }

    /// `completed` is the only terminal status
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Whether the state machine allows moving from `self` to `next`.
    /// Setting the current status again is always allowed.
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::InProgress, Self::InProgress | Self::Paused | Self::Completed)
                | (Self::Paused, Self::Paused | Self::InProgress | Self::Completed)
                | (Self::Completed, Self::Completed)
        )
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a SessionStatus from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid session status: {0} (expected in_progress, completed or paused)")]
pub struct SessionStatusParseError(pub String);

impl std::str::FromStr for SessionStatus {
    type Err = SessionStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "paused" => Ok(Self::Paused),
            other => Err(SessionStatusParseError(other.to_string())),
        }
    }
}

/// Workout session entity
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    pub id: RecordId,
    pub member_id: RecordId,
    pub exercise_id: RecordId,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Length of the workout in seconds
    pub duration: Option<u32>,
    pub reps: u32,
    pub calories_burned: f64,
    pub average_posture_accuracy: f64,
    pub posture_scores: Vec<f64>,
    pub status: SessionStatus,
}

/// Insertable projection of a session.
///
/// `status`, `posture_scores`, `end_time` and `duration` are not part of it:
/// every new session starts `in_progress` with no samples.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    pub member_id: RecordId,
    pub exercise_id: RecordId,
    pub reps: Option<u32>,
    pub calories_burned: Option<f64>,
    pub average_posture_accuracy: Option<f64>,
}

impl NewSession {
    /// Create an insertable session with only the references set
    pub fn new(member_id: RecordId, exercise_id: RecordId) -> Self {
        Self {
            member_id,
            exercise_id,
            reps: None,
            calories_burned: None,
            average_posture_accuracy: None,
        }
    }
}

/// Partial update of a session (the mutable fields only)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionChanges {
    pub end_time: Option<DateTime<Utc>>,
    pub duration: Option<u32>,
    pub reps: Option<u32>,
    pub calories_burned: Option<f64>,
    pub average_posture_accuracy: Option<f64>,
    pub posture_scores: Option<Vec<f64>>,
    pub status: Option<SessionStatus>,
}

impl SessionChanges {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.end_time.is_none()
            && self.duration.is_none()
            && self.reps.is_none()
            && self.calories_burned.is_none()
            && self.average_posture_accuracy.is_none()
            && self.posture_scores.is_none()
            && self.status.is_none()
    }
}

impl WorkoutSession {
    /// Build a freshly started session
    pub fn start(id: RecordId, input: NewSession, start_time: DateTime<Utc>) -> Self {
        Self {
            id,
            member_id: input.member_id,
            exercise_id: input.exercise_id,
            start_time,
            end_time: None,
            duration: None,
            reps: input.reps.unwrap_or(0),
            calories_burned: input.calories_burned.unwrap_or(0.0),
            average_posture_accuracy: input.average_posture_accuracy.unwrap_or(0.0),
            posture_scores: Vec::new(),
            status: SessionStatus::InProgress,
        }
    }

    /// Produce a copy with every supplied field overwritten.
    ///
    /// A supplied `posture_scores` replaces the stored samples. Identity,
    /// references and `start_time` are never touched.
    pub fn merged(&self, changes: &SessionChanges) -> Self {
        let mut updated = self.clone();
        if let Some(end_time) = changes.end_time {
            updated.end_time = Some(end_time);
        }
        if let Some(duration) = changes.duration {
            updated.duration = Some(duration);
        }
        if let Some(reps) = changes.reps {
            updated.reps = reps;
        }
        if let Some(calories) = changes.calories_burned {
            updated.calories_burned = calories;
        }
        if let Some(accuracy) = changes.average_posture_accuracy {
            updated.average_posture_accuracy = accuracy;
        }
        if let Some(scores) = &changes.posture_scores {
            updated.posture_scores.clone_from(scores);
        }
        if let Some(status) = changes.status {
            updated.status = status;
        }
        updated
    }

    /// Check if the session has been finalized
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }
}
