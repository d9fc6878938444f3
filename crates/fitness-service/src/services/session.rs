//! Workout session service
//!
//! Starts sessions, records progress and finalizes them. Two optional rules
//! come from [`WorkoutPolicy`](fitness_common::WorkoutPolicy):
//! - `verify_references`: a new session must name an existing member and exercise
//! - `strict_transitions`: a `completed` session cannot change status again

use fitness_core::entities::{NewSession, SessionChanges};
use fitness_core::{DomainError, RecordId};
use tracing::{debug, info, instrument};

use crate::dto::{CreateSessionRequest, SessionResponse, UpdateSessionRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Session service
pub struct SessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SessionService<'a> {
    /// Create a new SessionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every session in creation order
    #[instrument(skip(self))]
    pub async fn list_sessions(&self) -> ServiceResult<Vec<SessionResponse>> {
        let sessions = self.ctx.session_repo().list().await?;
        Ok(sessions.iter().map(SessionResponse::from).collect())
    }

    /// Sessions belonging to one member; empty for an unknown member
    #[instrument(skip(self))]
    pub async fn list_member_sessions(
        &self,
        member_id: &RecordId,
    ) -> ServiceResult<Vec<SessionResponse>> {
        let sessions = self.ctx.session_repo().find_by_member(member_id).await?;
        Ok(sessions.iter().map(SessionResponse::from).collect())
    }

    /// Get session by ID
    #[instrument(skip(self))]
    pub async fn get_session(&self, session_id: &RecordId) -> ServiceResult<SessionResponse> {
        let session = self
            .ctx
            .session_repo()
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Session", session_id.as_str()))?;

        Ok(SessionResponse::from(&session))
    }

    /// Start a new session in `in_progress`
    #[instrument(skip(self, request), fields(member_id = %request.member_id))]
    pub async fn start_session(
        &self,
        request: CreateSessionRequest,
    ) -> ServiceResult<SessionResponse> {
        let member_id = RecordId::parse(&request.member_id)
            .map_err(|e| ServiceError::validation(format!("memberId: {e}")))?;
        let exercise_id = RecordId::parse(&request.exercise_id)
            .map_err(|e| ServiceError::validation(format!("exerciseId: {e}")))?;

        if self.ctx.workout_policy().verify_references {
            self.ensure_references(&member_id, &exercise_id).await?;
        }

        let input = NewSession {
            member_id,
            exercise_id,
            reps: request.reps,
            calories_burned: request.calories_burned,
            average_posture_accuracy: request.average_posture_accuracy,
        };
        let session = self.ctx.session_repo().create(input).await?;

        info!(session_id = %session.id, "Session started");
        Ok(SessionResponse::from(&session))
    }

    /// Apply a partial update to a session
    #[instrument(skip(self, request))]
    pub async fn update_session(
        &self,
        session_id: &RecordId,
        request: UpdateSessionRequest,
    ) -> ServiceResult<SessionResponse> {
        let changes = SessionChanges::from(request);

        if self.ctx.workout_policy().strict_transitions {
            self.ensure_transition(session_id, &changes).await?;
        }

        let session = self
            .ctx
            .session_repo()
            .update(session_id, changes)
            .await?
            .ok_or_else(|| ServiceError::not_found("Session", session_id.as_str()))?;

        info!(session_id = %session.id, status = %session.status, "Session updated");
        Ok(SessionResponse::from(&session))
    }

    async fn ensure_references(
        &self,
        member_id: &RecordId,
        exercise_id: &RecordId,
    ) -> ServiceResult<()> {
        if self.ctx.member_repo().find_by_id(member_id).await?.is_none() {
            debug!("Session references unknown member");
            return Err(DomainError::UnknownMember(member_id.clone()).into());
        }
        if self
            .ctx
            .exercise_repo()
            .find_by_id(exercise_id)
            .await?
            .is_none()
        {
            debug!("Session references unknown exercise");
            return Err(DomainError::UnknownExercise(exercise_id.clone()).into());
        }
        Ok(())
    }

    async fn ensure_transition(
        &self,
        session_id: &RecordId,
        changes: &SessionChanges,
    ) -> ServiceResult<()> {
        let Some(next) = changes.status else {
            return Ok(());
        };

        let current = self
            .ctx
            .session_repo()
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Session", session_id.as_str()))?;

        if current.status.can_transition_to(next) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: current.status,
                to: next,
            }
            .into())
        }
    }
}
