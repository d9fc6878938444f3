//! Fitness Studio API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p fitness-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use fitness_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!("Starting Fitness Studio API Server...");
    info!(
        env = ?config.app.env,
        port = config.api.port,
        seed_fixtures = config.store.seed_fixtures,
        "Configuration loaded"
    );

    // Run the server
    fitness_api::run(config).await?;

    Ok(())
}
