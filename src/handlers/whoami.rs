use axum::Json;
use serde::Serialize;

use crate::middleware::ApiKey;

#[derive(Debug, Serialize)]
pub struct WhoAmI {
    pub api_key: String,
}

/// Echoes back the key the caller authenticated with.
pub async fn whoami(ApiKey(api_key): ApiKey) -> Json<WhoAmI> {
    Json(WhoAmI { api_key })
}
