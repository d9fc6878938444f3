//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Absent optional
//! values are written as `null` rather than omitted.

use chrono::{DateTime, Utc};
use serde::Serialize;

use fitness_core::SessionStatus;

// ============================================================================
// Entity Responses
// ============================================================================

/// Member record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub joined_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Exercise record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub calories_per_minute: f64,
    pub proper_form_tips: Vec<String>,
    pub common_mistakes: Vec<String>,
}

/// Workout session record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: String,
    pub member_id: String,
    pub exercise_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: Option<u32>,
    pub reps: u32,
    pub calories_burned: f64,
    pub average_posture_accuracy: f64,
    pub posture_scores: Vec<f64>,
    pub status: SessionStatus,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

/// Aggregate figures for the dashboard stat cards
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_members: usize,
    pub active_members: usize,
    pub total_exercises: usize,
    pub total_sessions: usize,
    pub completed_sessions: usize,
    pub in_progress_sessions: usize,
    pub paused_sessions: usize,
    pub total_reps: u64,
    pub total_calories: f64,
    /// Mean of `averagePostureAccuracy` over completed sessions, 0 when none
    pub average_posture_accuracy: f64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Present only when the store answered
    pub store: Option<StoreCounts>,
}

/// Number of records held per table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub members: usize,
    pub exercises: usize,
    pub sessions: usize,
}

impl ReadinessResponse {
    pub fn ready(store: StoreCounts) -> Self {
        Self {
            status: "ready".to_string(),
            timestamp: Utc::now(),
            store: Some(store),
        }
    }

    pub fn not_ready() -> Self {
        Self {
            status: "not_ready".to_string(),
            timestamp: Utc::now(),
            store: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.store.is_some()
    }
}
