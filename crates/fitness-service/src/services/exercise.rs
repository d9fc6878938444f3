//! Exercise service
//!
//! Handles the exercise catalogue.

use fitness_core::RecordId;
use tracing::{info, instrument};

use crate::dto::{CreateExerciseRequest, ExerciseResponse, UpdateExerciseRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Exercise service
pub struct ExerciseService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExerciseService<'a> {
    /// Create a new ExerciseService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the catalogue in insertion order
    #[instrument(skip(self))]
    pub async fn list_exercises(&self) -> ServiceResult<Vec<ExerciseResponse>> {
        let exercises = self.ctx.exercise_repo().list().await?;
        Ok(exercises.iter().map(ExerciseResponse::from).collect())
    }

    /// Get exercise by ID
    #[instrument(skip(self))]
    pub async fn get_exercise(&self, exercise_id: &RecordId) -> ServiceResult<ExerciseResponse> {
        let exercise = self
            .ctx
            .exercise_repo()
            .find_by_id(exercise_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Exercise", exercise_id.as_str()))?;

        Ok(ExerciseResponse::from(&exercise))
    }

    /// Add an exercise to the catalogue
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_exercise(
        &self,
        request: CreateExerciseRequest,
    ) -> ServiceResult<ExerciseResponse> {
        let exercise = self.ctx.exercise_repo().create(request.into()).await?;

        info!(exercise_id = %exercise.id, "Exercise created");
        Ok(ExerciseResponse::from(&exercise))
    }

    /// Apply a partial update to an exercise
    #[instrument(skip(self, request))]
    pub async fn update_exercise(
        &self,
        exercise_id: &RecordId,
        request: UpdateExerciseRequest,
    ) -> ServiceResult<ExerciseResponse> {
        let exercise = self
            .ctx
            .exercise_repo()
            .update(exercise_id, request.into())
            .await?
            .ok_or_else(|| ServiceError::not_found("Exercise", exercise_id.as_str()))?;

        info!(exercise_id = %exercise.id, "Exercise updated");
        Ok(ExerciseResponse::from(&exercise))
    }
}
