use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // The directory starts empty and is dropped when the server stops
    let state = AppState::new(config);

    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let app = create_router::<openapi::ApiDoc>(api_routes).merge(health_router(state.config.app));

    info!(
        "Starting {} v{}",
        state.config.app.name, state.config.app.version
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("User directory shutdown complete");
    Ok(())
}
