use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    controller::util::auth::require_user,
    data::automation_log::AutomationLogRepository,
    error::Error,
    model::{
        api::{tenant_filter, ApiResponse, ErrorDto, ValidatedJson},
        app::AppState,
        automation::{AutomationListParams, AutomationLogRow, CreateAutomationLogDto},
    },
};

pub static AUTOMATION_TAG: &str = "automation";

/// List automation logs with optional tenant and type filters
#[utoipa::path(
    get,
    path = "/api/automation",
    tag = AUTOMATION_TAG,
    params(AutomationListParams),
    responses(
        (status = 200, description = "Automation logs with practice names, newest first", body = Vec<AutomationLogRow>),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AutomationListParams>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let practice_id = tenant_filter(params.practice_id.as_deref())?;

    let mut logs = AutomationLogRepository::new(&state.db)
        .list(practice_id, params.limit, params.offset)
        .await?;

    if let Some(automation_type) = params.automation_type {
        logs.retain(|log| log.automation_type == automation_type);
    }

    let count = logs.len();
    Ok(Json(ApiResponse::list(logs, count)))
}

/// Record an automation run
#[utoipa::path(
    post,
    path = "/api/automation",
    tag = AUTOMATION_TAG,
    request_body = CreateAutomationLogDto,
    responses(
        (status = 201, description = "Automation run recorded", body = Object),
        (status = 400, description = "Invalid input data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(dto): ValidatedJson<CreateAutomationLogDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let log = AutomationLogRepository::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(log))))
}
