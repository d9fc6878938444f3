//! Test fixtures and data generators
//!
//! Provides reusable request bodies and typed views of API responses.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Requests
// ============================================================================

/// Create member request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberBody {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl CreateMemberBody {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            avatar: None,
            is_active: None,
        }
    }

    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self::new(&format!("Member {suffix}"), &format!("member{suffix}@example.com"))
    }
}

/// Create exercise request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseBody {
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub calories_per_minute: f64,
    pub proper_form_tips: Vec<String>,
    pub common_mistakes: Vec<String>,
}

impl CreateExerciseBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Jumping Jacks {suffix}"),
            description: "Full body warm-up".to_string(),
            category: "cardio".to_string(),
            difficulty: "beginner".to_string(),
            calories_per_minute: 8.5,
            proper_form_tips: vec!["Land softly".to_string(), "Keep a steady rhythm".to_string()],
            common_mistakes: vec!["Locking knees".to_string()],
        }
    }
}

/// Start session request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionBody {
    pub member_id: String,
    pub exercise_id: String,
}

impl CreateSessionBody {
    pub fn new(member_id: &str, exercise_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            exercise_id: exercise_id.to_string(),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Member response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub joined_at: String,
    pub is_active: bool,
}

/// Exercise response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub calories_per_minute: f64,
    pub proper_form_tips: Vec<String>,
    pub common_mistakes: Vec<String>,
}

/// Workout session response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub member_id: String,
    pub exercise_id: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration: Option<u32>,
    pub reps: u32,
    pub calories_burned: f64,
    pub average_posture_accuracy: f64,
    pub posture_scores: Vec<f64>,
    pub status: String,
}

/// Dashboard stats response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_members: usize,
    pub active_members: usize,
    pub total_exercises: usize,
    pub total_sessions: usize,
    pub completed_sessions: usize,
    pub in_progress_sessions: usize,
    pub total_reps: u64,
    pub total_calories: f64,
    pub average_posture_accuracy: f64,
}
