use axum::http::{HeaderMap, header::AUTHORIZATION};
use thiserror::Error;

/// The only scheme accepted in front of the key, compared case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Why a key could not be pulled out of a request's headers.
///
/// Branch on the variant, not the display text. The text of
/// [`ApiKeyError::MalformedHeader`] is fixed regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extracts the key from an `Authorization: ApiKey <key>` header.
///
/// The value is split on single spaces, the first piece must be exactly
/// [`API_KEY_SCHEME`], and the second piece is returned as-is. That means
/// anything after the second piece is dropped (`"ApiKey abc def"` gives
/// `"abc"`), and extra spacing after the scheme yields an empty key rather than
/// an error (`"ApiKey   abc"` and `"ApiKey "` both give `""`).
///
/// # Errors
///
/// Returns [`ApiKeyError::NoAuthHeaderIncluded`] if the header is missing or
/// empty, and [`ApiKeyError::MalformedHeader`] if the value has no space, the
/// scheme does not match, or the value is not visible ASCII.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, ApiKeyError> {
    let Some(value) = headers.get(AUTHORIZATION).filter(|v| !v.is_empty()) else {
        return Err(ApiKeyError::NoAuthHeaderIncluded);
    };

    let auth = value.to_str().map_err(|_| ApiKeyError::MalformedHeader)?;

    let mut parts = auth.split(' ');
    let (Some(scheme), Some(key)) = (parts.next(), parts.next()) else {
        return Err(ApiKeyError::MalformedHeader);
    };

    if scheme != API_KEY_SCHEME {
        return Err(ApiKeyError::MalformedHeader);
    }

    Ok(key)
}
