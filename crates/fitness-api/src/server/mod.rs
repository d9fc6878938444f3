//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;

use axum::Router;
use fitness_common::{AppConfig, AppError};
use fitness_service::ServiceContext;
use fitness_store::MemStorage;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router, state.config());
    router.with_state(state)
}

/// Create the store and the AppState around it
///
/// Each call yields an independent store, seeded when `SEED_FIXTURES` is on.
pub fn create_app_state(config: AppConfig) -> AppState {
    let storage = if config.store.seed_fixtures {
        MemStorage::seeded()
    } else {
        info!("Starting with an empty store");
        MemStorage::new()
    };

    let service_context = ServiceContext::in_memory(&storage, config.workouts);
    AppState::new(service_context, config)
}

/// Run the HTTP server on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Server error: {e}")))
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address: {e}")))?;

    // Create app state
    let state = create_app_state(config);

    // Build application
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}
