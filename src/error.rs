use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::auth::ApiKeyError;

#[derive(Debug)]
pub enum AppError {
    Unauthorized,
}

impl From<ApiKeyError> for AppError {
    fn from(_: ApiKeyError) -> Self {
        AppError::Unauthorized
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "").into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_key_errors_become_unauthorized() {
        for err in [ApiKeyError::NoAuthHeaderIncluded, ApiKeyError::MalformedHeader] {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }
}
