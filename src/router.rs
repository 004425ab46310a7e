use std::time::Duration;

use axum::{Router, http::StatusCode, middleware, routing::get};
use tower_http::timeout::TimeoutLayer;

use crate::handlers::{healthz, whoami};
use crate::middleware::require_api_key;
use crate::state::AppState;

fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Assembles the service: `/healthz` is open, everything else sits behind
/// `require_api_key`.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    let timeout = state.config.request_timeout();

    let protected = Router::new()
        .route("/whoami", get(whoami))
        .route_layer(middleware::from_fn(require_api_key));

    Router::new()
        .route("/healthz", get(healthz))
        .merge(protected)
        .with_state(state)
        .layer(timeout_layer(timeout))
}
