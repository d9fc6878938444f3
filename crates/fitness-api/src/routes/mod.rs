//! Route definitions
//!
//! Resource routes are organized by domain and mounted under /api.

use axum::{
    routing::get,
    Router,
};

use crate::handlers::{exercises, health, members, sessions, stats};
use crate::state::AppState;

/// Create the main router: resource routes plus health probes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Resource routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(member_routes())
        .merge(exercise_routes())
        .merge(session_routes())
        .route("/stats", get(stats::get_stats))
}

/// Member routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/members",
            get(members::list_members).post(members::create_member),
        )
        .route(
            "/members/:id",
            get(members::get_member).patch(members::update_member),
        )
        .route("/members/:id/sessions", get(members::list_member_sessions))
}

/// Exercise routes
fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/exercises",
            get(exercises::list_exercises).post(exercises::create_exercise),
        )
        .route(
            "/exercises/:id",
            get(exercises::get_exercise).patch(exercises::update_exercise),
        )
}

/// Session routes
fn session_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sessions",
            get(sessions::list_sessions).post(sessions::create_session),
        )
        .route(
            "/sessions/:id",
            get(sessions::get_session).patch(sessions::update_session),
        )
}
