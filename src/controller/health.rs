use axum::{response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

pub static HEALTH_TAG: &str = "health";

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up", body = Object)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "Bitewing backend is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Connectivity check for frontend integration
#[utoipa::path(
    get,
    path = "/api/test",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "API is reachable", body = Object)
    ),
)]
pub async fn api_test() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "Backend API is working correctly",
        "timestamp": Utc::now().to_rfc3339(),
        "data": {
            "test": true,
            "message": "Connection successful",
        },
    }))
}
