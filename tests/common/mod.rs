pub mod server;

use apikey_gate::{config::AppConfig, router::build_router, state::AppState};
use axum::Router;

pub const TEST_KEY: &str = "test_api_key_12345";

pub fn test_config(server_port: u16) -> AppConfig {
    AppConfig {
        server_port,
        request_timeout_secs: 5,
    }
}

pub fn create_test_app() -> Router {
    build_router(AppState::new(&test_config(0)))
}
