//! Workout session handlers

use axum::{extract::State, Json};
use fitness_service::{
    CreateSessionRequest, SessionResponse, SessionService, UpdateSessionRequest,
};

use crate::extractors::{RecordIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List sessions
///
/// GET /api/sessions
pub async fn list_sessions(State(state): State<AppState>) -> ApiResult<Json<Vec<SessionResponse>>> {
    let service = SessionService::new(state.service_context());
    let sessions = service.list_sessions().await?;
    Ok(Json(sessions))
}

/// Get session by ID
///
/// GET /api/sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    RecordIdPath(session_id): RecordIdPath,
) -> ApiResult<Json<SessionResponse>> {
    let service = SessionService::new(state.service_context());
    let session = service.get_session(&session_id).await?;
    Ok(Json(session))
}

/// Start a session
///
/// POST /api/sessions
pub async fn create_session(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateSessionRequest>,
) -> ApiResult<Created<SessionResponse>> {
    let service = SessionService::new(state.service_context());
    let session = service.start_session(request).await?;
    Ok(Created(session))
}

/// Record progress on a session or finalize it
///
/// PATCH /api/sessions/{id}
pub async fn update_session(
    State(state): State<AppState>,
    RecordIdPath(session_id): RecordIdPath,
    ValidatedJson(request): ValidatedJson<UpdateSessionRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let service = SessionService::new(state.service_context());
    let session = service.update_session(&session_id, request).await?;
    Ok(Json(session))
}
