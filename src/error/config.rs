use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::InternalServerError;

/// Startup configuration failures.
///
/// These normally abort the process before the listener binds; the
/// `IntoResponse` impl only exists so the crate error can delegate if one
/// ever surfaces mid-request.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Environment variable {var} has invalid value {raw:?}")]
    InvalidEnvValue { var: String, raw: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
