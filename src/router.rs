//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module registers every API endpoint and generates OpenAPI documentation
//! using utoipa. Swagger UI is served at `/api/docs` with the raw specification
//! at `/api/docs/openapi.json`. Unknown paths fall through to an enveloped 404.

use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller,
    model::{api::ErrorDto, app::AppState},
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// Handlers annotated with utoipa path specifications are collected into a
/// unified OpenAPI document. Authentication endpoints live under `/auth`,
/// the data API under `/api`, and `/health` is the unauthenticated liveness
/// probe.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes registered, ready to have
/// middleware layered on top and state attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Bitewing", description = "Dental billing practice-management API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Login, registration, and token verification"),
        (name = controller::practice::PRACTICE_TAG, description = "Dental practice management"),
        (name = controller::patient::PATIENT_TAG, description = "Patient records"),
        (name = controller::claim::CLAIM_TAG, description = "Insurance claims"),
        (name = controller::alert::ALERT_TAG, description = "Billing alerts"),
        (name = controller::automation::AUTOMATION_TAG, description = "Automation run logs"),
        (name = controller::user::USER_TAG, description = "Staff account administration"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Aggregated dashboard statistics"),
        (name = controller::health::HEALTH_TAG, description = "Liveness and connectivity probes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::health::api_test))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::verify))
        .routes(routes!(
            controller::practice::list,
            controller::practice::create
        ))
        .routes(routes!(
            controller::practice::get,
            controller::practice::update,
            controller::practice::delete
        ))
        .routes(routes!(
            controller::patient::list,
            controller::patient::create
        ))
        .routes(routes!(
            controller::patient::get,
            controller::patient::update,
            controller::patient::delete
        ))
        .routes(routes!(controller::claim::list, controller::claim::create))
        .routes(routes!(
            controller::claim::get,
            controller::claim::update,
            controller::claim::delete
        ))
        .routes(routes!(controller::alert::list, controller::alert::create))
        .routes(routes!(
            controller::alert::get,
            controller::alert::update,
            controller::alert::delete
        ))
        .routes(routes!(
            controller::automation::list,
            controller::automation::create
        ))
        .routes(routes!(controller::user::list, controller::user::create))
        .routes(routes!(controller::dashboard::stats))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(not_found)
}

/// Enveloped 404 for any path no route claims.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto::new("API endpoint not found")),
    )
}
