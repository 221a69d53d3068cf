use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    controller::util::auth::require_user,
    data::claim::ClaimRepository,
    error::Error,
    model::{
        api::{tenant_filter, ApiResponse, ErrorDto, ValidatedJson},
        app::AppState,
        claim::{ClaimListParams, ClaimRow, CreateClaimDto, UpdateClaimDto},
    },
};

pub static CLAIM_TAG: &str = "claims";

/// List claims with optional tenant and status filters
///
/// The status filter is applied in memory after the page is fetched, so a
/// filtered page may contain fewer than `limit` rows.
#[utoipa::path(
    get,
    path = "/api/claims",
    tag = CLAIM_TAG,
    params(ClaimListParams),
    responses(
        (status = 200, description = "Claims with patient and practice names, newest submission first", body = Vec<ClaimRow>),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ClaimListParams>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let practice_id = tenant_filter(params.practice_id.as_deref())?;

    let mut claims = ClaimRepository::new(&state.db)
        .list(practice_id, params.limit, params.offset)
        .await?;

    if let Some(status) = params.status {
        claims.retain(|claim| claim.status == status.as_str());
    }

    let count = claims.len();
    Ok(Json(ApiResponse::list(claims, count)))
}

/// Create a claim
#[utoipa::path(
    post,
    path = "/api/claims",
    tag = CLAIM_TAG,
    request_body = CreateClaimDto,
    responses(
        (status = 201, description = "Claim created", body = Object),
        (status = 400, description = "Invalid input data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(dto): ValidatedJson<CreateClaimDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let claim = ClaimRepository::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(claim))))
}

/// Get a claim by id
#[utoipa::path(
    get,
    path = "/api/claims/{id}",
    tag = CLAIM_TAG,
    params(("id" = Uuid, Path, description = "Claim id")),
    responses(
        (status = 200, description = "The requested claim with patient and practice names", body = ClaimRow),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Claim not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let claim = ClaimRepository::new(&state.db)
        .get(id)
        .await?
        .ok_or(Error::NotFound("Claim"))?;

    Ok(Json(ApiResponse::data(claim)))
}

/// Update a claim
#[utoipa::path(
    put,
    path = "/api/claims/{id}",
    tag = CLAIM_TAG,
    params(("id" = Uuid, Path, description = "Claim id")),
    request_body = UpdateClaimDto,
    responses(
        (status = 200, description = "The updated claim", body = Object),
        (status = 400, description = "Invalid input data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Claim not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateClaimDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let claim = ClaimRepository::new(&state.db)
        .update(id, dto)
        .await?
        .ok_or(Error::NotFound("Claim"))?;

    Ok(Json(ApiResponse::data(claim)))
}

/// Delete a claim
#[utoipa::path(
    delete,
    path = "/api/claims/{id}",
    tag = CLAIM_TAG,
    params(("id" = Uuid, Path, description = "Claim id")),
    responses(
        (status = 200, description = "Claim deleted", body = Object),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Claim not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    ClaimRepository::new(&state.db)
        .delete(id)
        .await?
        .ok_or(Error::NotFound("Claim"))?;

    Ok(Json(ApiResponse::message("Claim deleted successfully")))
}
