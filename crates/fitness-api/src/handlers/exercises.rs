//! Exercise handlers
//!
//! Endpoints for the exercise catalogue.

use axum::{extract::State, Json};
use fitness_service::{
    CreateExerciseRequest, ExerciseResponse, ExerciseService, UpdateExerciseRequest,
};

use crate::extractors::{RecordIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List exercises
///
/// GET /api/exercises
pub async fn list_exercises(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ExerciseResponse>>> {
    let service = ExerciseService::new(state.service_context());
    Ok(Json(service.list_exercises().await?))
}

/// Get exercise by ID
///
/// GET /api/exercises/{id}
pub async fn get_exercise(
    State(state): State<AppState>,
    RecordIdPath(exercise_id): RecordIdPath,
) -> ApiResult<Json<ExerciseResponse>> {
    let service = ExerciseService::new(state.service_context());
    Ok(Json(service.get_exercise(&exercise_id).await?))
}

/// Add an exercise
///
/// POST /api/exercises
pub async fn create_exercise(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateExerciseRequest>,
) -> ApiResult<Created<ExerciseResponse>> {
    let service = ExerciseService::new(state.service_context());
    Ok(Created(service.create_exercise(request).await?))
}

/// Update an exercise
///
/// PATCH /api/exercises/{id}
pub async fn update_exercise(
    State(state): State<AppState>,
    RecordIdPath(exercise_id): RecordIdPath,
    ValidatedJson(request): ValidatedJson<UpdateExerciseRequest>,
) -> ApiResult<Json<ExerciseResponse>> {
    let service = ExerciseService::new(state.service_context());
    Ok(Json(service.update_exercise(&exercise_id, request).await?))
}
