use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    controller::util::auth::require_user,
    data::patient::PatientRepository,
    error::Error,
    model::{
        api::{tenant_filter, ApiResponse, ErrorDto, ValidatedJson},
        app::AppState,
        patient::{CreatePatientDto, PatientListParams, UpdatePatientDto},
    },
};

pub static PATIENT_TAG: &str = "patients";

/// List patients, optionally scoped to a practice
#[utoipa::path(
    get,
    path = "/api/patients",
    tag = PATIENT_TAG,
    params(PatientListParams),
    responses(
        (status = 200, description = "Patients ordered by name", body = Object),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PatientListParams>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let practice_id = tenant_filter(params.practice_id.as_deref())?;

    let patients = PatientRepository::new(&state.db)
        .list(practice_id, params.limit, params.offset)
        .await?;

    let count = patients.len();
    Ok(Json(ApiResponse::list(patients, count)))
}

/// Create a patient
#[utoipa::path(
    post,
    path = "/api/patients",
    tag = PATIENT_TAG,
    request_body = CreatePatientDto,
    responses(
        (status = 201, description = "Patient created", body = Object),
        (status = 400, description = "Invalid input data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(dto): ValidatedJson<CreatePatientDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let patient = PatientRepository::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(patient))))
}

/// Get a patient by id
#[utoipa::path(
    get,
    path = "/api/patients/{id}",
    tag = PATIENT_TAG,
    params(("id" = Uuid, Path, description = "Patient id")),
    responses(
        (status = 200, description = "The requested patient", body = Object),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let patient = PatientRepository::new(&state.db)
        .get(id)
        .await?
        .ok_or(Error::NotFound("Patient"))?;

    Ok(Json(ApiResponse::data(patient)))
}

/// Update a patient
#[utoipa::path(
    put,
    path = "/api/patients/{id}",
    tag = PATIENT_TAG,
    params(("id" = Uuid, Path, description = "Patient id")),
    request_body = UpdatePatientDto,
    responses(
        (status = 200, description = "The updated patient", body = Object),
        (status = 400, description = "Invalid input data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdatePatientDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let patient = PatientRepository::new(&state.db)
        .update(id, dto)
        .await?
        .ok_or(Error::NotFound("Patient"))?;

    Ok(Json(ApiResponse::data(patient)))
}

/// Delete a patient
#[utoipa::path(
    delete,
    path = "/api/patients/{id}",
    tag = PATIENT_TAG,
    params(("id" = Uuid, Path, description = "Patient id")),
    responses(
        (status = 200, description = "Patient deleted", body = Object),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    PatientRepository::new(&state.db)
        .delete(id)
        .await?
        .ok_or(Error::NotFound("Patient"))?;

    Ok(Json(ApiResponse::message("Patient deleted successfully")))
}
