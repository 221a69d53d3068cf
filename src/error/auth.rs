use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::model::api::ErrorDto;

/// Authentication and authorization failures.
///
/// Everything here except [`AuthError::Forbidden`] maps to a 401; the
/// response body carries the same wording the API has always used so existing
/// clients keep matching on it.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Access token required")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("User not found")]
    UserNotFound,
    #[error("Account is deactivated")]
    AccountDeactivated,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Insufficient permissions")]
    Forbidden,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        debug!("authentication error: {}", self);

        let status = match self {
            Self::Forbidden => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
