use axum::{
    extract::{FromRequestParts, Request},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::auth::get_api_key;
use crate::error::AppError;

/// The key a caller presented in its `Authorization: ApiKey <key>` header.
///
/// Whether the key is actually known to anyone is left to the handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(pub String);

fn extract_api_key(headers: &HeaderMap) -> Result<ApiKey, AppError> {
    match get_api_key(headers) {
        Ok(key) => {
            tracing::debug!(key_len = key.len(), "Extracted API key from authorization header");
            Ok(ApiKey(key.to_owned()))
        }
        Err(e) => {
            tracing::debug!("Rejecting request: {e}");
            Err(e.into())
        }
    }
}

/// Rejects requests without a well-formed `ApiKey` authorization header and
/// stashes the key in the request extensions for downstream handlers.
///
/// # Errors
///
/// Returns [`AppError::Unauthorized`] if the header is missing or malformed.
pub async fn require_api_key(mut req: Request, next: Next) -> Result<Response, AppError> {
    let key = extract_api_key(req.headers())?;
    req.extensions_mut().insert(key);

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // already pulled out by `require_api_key`
        if let Some(key) = parts.extensions.get::<ApiKey>() {
            return Ok(key.clone());
        }

        extract_api_key(&parts.headers)
    }
}
