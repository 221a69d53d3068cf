use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    controller::util::auth::{require_role, require_user},
    data::user::UserRepository,
    error::Error,
    model::{
        api::{tenant_filter, ApiResponse, ErrorDto, ValidatedJson},
        app::AppState,
        auth::{Role, UserDto},
        user::{CreateUserDto, UserListParams, UserRow},
    },
    service::auth::hash_password,
};

pub static USER_TAG: &str = "users";

/// List users, optionally scoped to a practice
///
/// The password hash is excluded from the projection; it never reaches the
/// response.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserListParams),
    responses(
        (status = 200, description = "Users with practice names, newest first", body = Vec<UserRow>),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &headers).await?;

    let practice_id = tenant_filter(params.practice_id.as_deref())?;

    let users = UserRepository::new(&state.db)
        .list(practice_id, params.limit, params.offset)
        .await?;

    let count = users.len();
    Ok(Json(ApiResponse::list(users, count)))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created, without the password hash", body = UserDto),
        (status = 400, description = "Invalid input data or email already registered", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = require_user(&state, &headers).await?;
    require_role(&caller, &[Role::Admin])?;

    let repository = UserRepository::new(&state.db);

    if repository.get_by_email(&dto.email).await?.is_some() {
        return Err(Error::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let password_hash = hash_password(dto.password).await?;

    let user = repository
        .create(
            dto.practice_id,
            dto.email,
            password_hash,
            dto.role,
            dto.first_name,
            dto.last_name,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(UserDto::from(user))),
    ))
}
