use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    controller::util::auth::require_user,
    data::alert::AlertRepository,
    error::Error,
    model::{
        alert::{AlertListParams, AlertRow, CreateAlertDto, UpdateAlertDto},
        api::{tenant_filter, ApiResponse, ErrorDto, ValidatedJson},
        app::AppState,
    },
};

pub static ALERT_TAG: &str = "alerts";

/// List alerts with optional tenant, resolution, and priority filters
///
/// The resolution and priority filters run in memory after the page is
/// fetched, so a filtered page may contain fewer than `limit` rows.
#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = ALERT_TAG,
    params(AlertListParams),
    responses(
        (status = 200, description = "Alerts with related patient and practice names, newest first", body = Vec<AlertRow>),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AlertListParams>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let practice_id = tenant_filter(params.practice_id.as_deref())?;

    let mut alerts = AlertRepository::new(&state.db)
        .list(practice_id, params.limit, params.offset)
        .await?;

    if let Some(resolved) = params.resolved {
        alerts.retain(|alert| alert.is_resolved == resolved);
    }
    if let Some(priority) = params.priority {
        alerts.retain(|alert| alert.priority == priority.as_str());
    }

    let count = alerts.len();
    Ok(Json(ApiResponse::list(alerts, count)))
}

/// Create an alert
#[utoipa::path(
    post,
    path = "/api/alerts",
    tag = ALERT_TAG,
    request_body = CreateAlertDto,
    responses(
        (status = 201, description = "Alert created", body = Object),
        (status = 400, description = "Invalid input data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(dto): ValidatedJson<CreateAlertDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let alert = AlertRepository::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(alert))))
}

/// Get an alert by id
#[utoipa::path(
    get,
    path = "/api/alerts/{id}",
    tag = ALERT_TAG,
    params(("id" = Uuid, Path, description = "Alert id")),
    responses(
        (status = 200, description = "The requested alert with related names", body = AlertRow),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let alert = AlertRepository::new(&state.db)
        .get(id)
        .await?
        .ok_or(Error::NotFound("Alert"))?;

    Ok(Json(ApiResponse::data(alert)))
}

/// Update an alert, typically to resolve it
#[utoipa::path(
    put,
    path = "/api/alerts/{id}",
    tag = ALERT_TAG,
    params(("id" = Uuid, Path, description = "Alert id")),
    request_body = UpdateAlertDto,
    responses(
        (status = 200, description = "The updated alert", body = Object),
        (status = 400, description = "Invalid input data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateAlertDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let alert = AlertRepository::new(&state.db)
        .update(id, dto)
        .await?
        .ok_or(Error::NotFound("Alert"))?;

    Ok(Json(ApiResponse::data(alert)))
}

/// Delete an alert
#[utoipa::path(
    delete,
    path = "/api/alerts/{id}",
    tag = ALERT_TAG,
    params(("id" = Uuid, Path, description = "Alert id")),
    responses(
        (status = 200, description = "Alert deleted", body = Object),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    AlertRepository::new(&state.db)
        .delete(id)
        .await?
        .ok_or(Error::NotFound("Alert"))?;

    Ok(Json(ApiResponse::message("Alert deleted successfully")))
}
