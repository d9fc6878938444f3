//! Member handlers
//!
//! Endpoints for the member directory.

use axum::{extract::State, Json};
use fitness_service::{
    CreateMemberRequest, MemberResponse, MemberService, SessionResponse, SessionService,
    UpdateMemberRequest,
};

use crate::extractors::{RecordIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List members
///
/// GET /api/members
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Json<Vec<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let members = service.list_members().await?;
    Ok(Json(members))
}

/// Get member by ID
///
/// GET /api/members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    RecordIdPath(member_id): RecordIdPath,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let member = service.get_member(&member_id).await?;
    Ok(Json(member))
}

/// Register a member
///
/// POST /api/members
pub async fn create_member(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMemberRequest>,
) -> ApiResult<Created<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let member = service.create_member(request).await?;
    Ok(Created(member))
}

/// Update a member
///
/// PATCH /api/members/{id}
pub async fn update_member(
    State(state): State<AppState>,
    RecordIdPath(member_id): RecordIdPath,
    ValidatedJson(request): ValidatedJson<UpdateMemberRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let member = service.update_member(&member_id, request).await?;
    Ok(Json(member))
}

/// List a member's workout sessions
///
/// GET /api/members/{id}/sessions
pub async fn list_member_sessions(
    State(state): State<AppState>,
    RecordIdPath(member_id): RecordIdPath,
) -> ApiResult<Json<Vec<SessionResponse>>> {
    let service = SessionService::new(state.service_context());
    let sessions = service.list_member_sessions(&member_id).await?;
    Ok(Json(sessions))
}
