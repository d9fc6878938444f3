//! Dashboard statistics
//!
//! Aggregates computed on demand from the current contents of the store.

use fitness_core::{posture, SessionStatus};
use tracing::instrument;

use crate::dto::StatsResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Stats service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compute the dashboard summary
    #[instrument(skip(self))]
    pub async fn summary(&self) -> ServiceResult<StatsResponse> {
        let members = self.ctx.member_repo().list().await?;
        let total_exercises = self.ctx.exercise_repo().count().await?;
        let sessions = self.ctx.session_repo().list().await?;

        let count_status =
            |status: SessionStatus| sessions.iter().filter(|s| s.status == status).count();

        let completed_accuracy: Vec<f64> = sessions
            .iter()
            .filter(|s| s.is_completed())
            .map(|s| s.average_posture_accuracy)
            .collect();

        Ok(StatsResponse {
            total_members: members.len(),
            active_members: members.iter().filter(|m| m.is_active).count(),
            total_exercises,
            total_sessions: sessions.len(),
            completed_sessions: count_status(SessionStatus::Completed),
            in_progress_sessions: count_status(SessionStatus::InProgress),
            paused_sessions: count_status(SessionStatus::Paused),
            total_reps: sessions.iter().map(|s| u64::from(s.reps)).sum(),
            total_calories: sessions.iter().map(|s| s.calories_burned).sum(),
            average_posture_accuracy: posture::mean(&completed_accuracy),
        })
    }
}
