//! Dashboard statistics handler

use axum::{extract::State, Json};
use fitness_service::{StatsResponse, StatsService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Dashboard summary
///
/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let service = StatsService::new(state.service_context());
    Ok(Json(service.summary().await?))
}
