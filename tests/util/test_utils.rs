//! Test utilities for driving controllers directly against an in-memory database.

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue},
    response::Response,
};
use bitewing::{config::Config, model::app::AppState};
use bitewing_test_utils::prelude::*;
use sea_orm::DatabaseConnection;

/// Builds an [`AppState`] around the given test database, signing tokens with
/// [`TEST_JWT_SECRET`].
pub fn test_state(db: DatabaseConnection) -> AppState {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        port: 0,
        allowed_origins: vec![],
        rate_limit_window_secs: 900,
        rate_limit_max_requests: 100,
    };

    AppState::new(db, config)
}

/// Issues an access token for `user` against the test state's signing key.
pub fn issue_token(state: &AppState, user: &entity::user::Model) -> String {
    state.token_authority.issue(user).unwrap()
}

/// Header map carrying `Authorization: Bearer <token>`.
pub fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    );
    headers
}

/// Collects a response body into a JSON value for envelope assertions.
pub async fn response_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
