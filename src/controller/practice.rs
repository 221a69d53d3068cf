use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    controller::util::auth::{require_role, require_user},
    data::practice::PracticeRepository,
    error::Error,
    model::{
        api::{ApiResponse, ErrorDto, ValidatedJson},
        app::AppState,
        auth::Role,
        practice::{CreatePracticeDto, UpdatePracticeDto},
    },
};

pub static PRACTICE_TAG: &str = "practices";

/// List all practices
#[utoipa::path(
    get,
    path = "/api/practices",
    tag = PRACTICE_TAG,
    responses(
        (status = 200, description = "All practices, newest first", body = Object),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let practices = PracticeRepository::new(&state.db).list().await?;

    let count = practices.len();
    Ok(Json(ApiResponse::list(practices, count)))
}

/// Create a practice
#[utoipa::path(
    post,
    path = "/api/practices",
    tag = PRACTICE_TAG,
    request_body = CreatePracticeDto,
    responses(
        (status = 201, description = "Practice created", body = Object),
        (status = 400, description = "Invalid input data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(dto): ValidatedJson<CreatePracticeDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &headers).await?;
    require_role(&user, &[Role::Admin])?;

    let practice = PracticeRepository::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(practice))))
}

/// Get a practice by id
#[utoipa::path(
    get,
    path = "/api/practices/{id}",
    tag = PRACTICE_TAG,
    params(("id" = Uuid, Path, description = "Practice id")),
    responses(
        (status = 200, description = "The requested practice", body = Object),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Practice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let practice = PracticeRepository::new(&state.db)
        .get(id)
        .await?
        .ok_or(Error::NotFound("Practice"))?;

    Ok(Json(ApiResponse::data(practice)))
}

/// Update a practice
#[utoipa::path(
    put,
    path = "/api/practices/{id}",
    tag = PRACTICE_TAG,
    params(("id" = Uuid, Path, description = "Practice id")),
    request_body = UpdatePracticeDto,
    responses(
        (status = 200, description = "The updated practice", body = Object),
        (status = 400, description = "Invalid input data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Practice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdatePracticeDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &headers).await?;
    require_role(&user, &[Role::Admin])?;

    let practice = PracticeRepository::new(&state.db)
        .update(id, dto)
        .await?
        .ok_or(Error::NotFound("Practice"))?;

    Ok(Json(ApiResponse::data(practice)))
}

/// Delete a practice
#[utoipa::path(
    delete,
    path = "/api/practices/{id}",
    tag = PRACTICE_TAG,
    params(("id" = Uuid, Path, description = "Practice id")),
    responses(
        (status = 200, description = "Practice deleted", body = Object),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Practice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &headers).await?;
    require_role(&user, &[Role::Admin])?;

    PracticeRepository::new(&state.db)
        .delete(id)
        .await?
        .ok_or(Error::NotFound("Practice"))?;

    Ok(Json(ApiResponse::message("Practice deleted successfully")))
}
