use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::util::auth::require_user,
    error::Error,
    model::{
        api::{tenant_filter, ApiResponse, ErrorDto},
        app::AppState,
        dashboard::{DashboardParams, DashboardStats},
    },
    service::dashboard::DashboardService,
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Dashboard statistics, optionally scoped to a practice
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    params(DashboardParams),
    responses(
        (status = 200, description = "Aggregated claim, revenue, and alert statistics", body = DashboardStats),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Failed to fetch dashboard stats", body = ErrorDto)
    ),
)]
pub async fn stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DashboardParams>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let practice_id = tenant_filter(params.practice_id.as_deref())?;

    let stats = DashboardService::new(&state.db).stats(practice_id).await?;

    Ok(Json(ApiResponse::data(stats)))
}
