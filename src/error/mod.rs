//! Error types for the Bitewing server.
//!
//! Domain-specific errors live in submodules (`auth`, `config`) and fold into
//! the crate-level [`Error`] via `thiserror`'s `#[from]`. Every error maps to
//! an HTTP response carrying the uniform `{success: false, error}` envelope.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::{
    error::{auth::AuthError, config::ConfigError},
    model::api::ErrorDto,
};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Authentication or authorization failure.
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// Request body failed field-level validation.
    #[error("Invalid input data")]
    Validation(validator::ValidationErrors),
    /// Request body could not be deserialized at all.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
    /// A query parameter did not parse.
    #[error("Invalid query parameter: {0}")]
    InvalidQuery(&'static str),
    /// The referenced record does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// A unique field collided with an existing record.
    #[error("{0}")]
    Conflict(String),
    /// The caller exceeded the per-IP request cap.
    #[error("Too many requests from this IP, please try again later.")]
    RateLimited,
    /// One of the dashboard's underlying fetches failed; no partial stats
    /// are ever returned.
    #[error("Failed to fetch dashboard stats")]
    Aggregation(#[source] sea_orm::DbErr),
    /// Internal invariant violation.
    #[error("Internal error: {0}")]
    Internal(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
    /// A blocking task (password hashing) panicked or was cancelled.
    #[error(transparent)]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Config(err) => err.into_response(),
            Self::Auth(err) => err.into_response(),
            Self::Validation(errors) => {
                debug!(error = %errors, "request validation failed");

                let details = serde_json::to_value(&errors).ok();
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::with_details("Invalid input data", details)),
                )
                    .into_response()
            }
            Self::MalformedBody(reason) => {
                debug!(%reason, "request body rejected");

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::new("Invalid input data")),
                )
                    .into_response()
            }
            Self::InvalidQuery(param) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(format!("Invalid query parameter: {param}"))),
            )
                .into_response(),
            Self::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new(format!("{resource} not found"))),
            )
                .into_response(),
            Self::Conflict(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(message))).into_response()
            }
            Self::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorDto::new(
                    "Too many requests from this IP, please try again later.",
                )),
            )
                .into_response(),
            Self::Aggregation(err) => {
                tracing::error!(error = %err, "dashboard aggregation failed");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Failed to fetch dashboard stats")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The full error is logged server-side; the client only ever sees a generic
/// message so internals are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
