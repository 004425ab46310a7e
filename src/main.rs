use std::net::SocketAddr;

use apikey_gate::{config::AppConfig, preflight, router::build_router, state::AppState};
use color_eyre::eyre::Result;

/// Main entry point for the API key gate.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables cannot be loaded
/// - The listening socket cannot be bound
/// - Server fails to start
#[tokio::main]
pub async fn main() -> Result<()> {
    preflight::setup_tracing();
    preflight::init_error_formatter()?;

    tracing::info!("Setting up application configuration from environment variables.");
    let config = AppConfig::new_from_env()?;
    let warnings = preflight::checks(&config);
    if warnings > 0 {
        tracing::warn!(
            "Preflight raised {warnings} configuration warning(s). Continuing with the configuration as given."
        );
    }

    tracing::info!(
        "Configuration set. Requests will time out after {} seconds. Configuring router...",
        config.request_timeout_secs
    );
    let state = AppState::new(&config);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "All setup is complete. Listening on {}; requests need an `Authorization: ApiKey <key>` header.",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}
