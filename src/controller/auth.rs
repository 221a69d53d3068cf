use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    controller::util::auth::bearer_token,
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{
        api::{ApiResponse, ErrorDto, ValidatedJson},
        app::AppState,
        auth::{LoginDto, LoginResponseDto, RegisterDto, VerifyResponseDto},
    },
    service::auth::AuthService,
};

pub static AUTH_TAG: &str = "auth";

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponseDto),
        (status = 400, description = "Invalid input data", body = ErrorDto),
        (status = 401, description = "Invalid credentials or deactivated account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let service = AuthService::new(&state.db, &state.token_authority);

    let response = service.login(dto).await?;

    Ok(Json(ApiResponse::data(response)))
}

/// Create a new user account
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = LoginResponseDto),
        (status = 400, description = "Invalid input data or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let service = AuthService::new(&state.db, &state.token_authority);

    let response = service.register(dto).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(response))))
}

/// Check whether the presented token is still valid
///
/// A token whose account no longer exists or has been deactivated is
/// reported as invalid, matching what the API gate would do with it.
#[utoipa::path(
    get,
    path = "/auth/verify",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Token is valid", body = VerifyResponseDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto)
    ),
)]
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    let token = bearer_token(&headers).ok_or(AuthError::MissingToken)?;

    let claims = state.token_authority.verify(token)?;

    let user = UserRepository::new(&state.db)
        .get_by_id(claims.sub)
        .await?
        .filter(|user| user.is_active)
        .ok_or(AuthError::InvalidToken)?;

    Ok(Json(ApiResponse::data(VerifyResponseDto {
        user: user.into(),
        valid: true,
    })))
}
