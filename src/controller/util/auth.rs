use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{
        app::AppState,
        auth::{CurrentUser, Role},
    },
};

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Resolves the caller's identity from the bearer token.
///
/// Verifies the token, then re-fetches the account so a user deleted or
/// deactivated after the token was issued is still rejected.
pub async fn require_user(state: &AppState, headers: &HeaderMap) -> Result<CurrentUser, Error> {
    let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;

    let claims = state.token_authority.verify(token)?;

    let user = UserRepository::new(&state.db)
        .get_by_id(claims.sub)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    if !user.is_active {
        return Err(AuthError::AccountDeactivated.into());
    }

    let role = Role::from_str(&user.role)
        .ok_or_else(|| Error::Internal(format!("unknown role {:?} on user", user.role)))?;

    Ok(CurrentUser {
        id: user.id,
        practice_id: user.practice_id,
        email: user.email,
        role,
        first_name: user.first_name,
        last_name: user.last_name,
    })
}

/// Like [`require_user`] but never rejects; any failure yields `None`.
pub async fn optional_user(state: &AppState, headers: &HeaderMap) -> Option<CurrentUser> {
    require_user(state, headers).await.ok()
}

/// Rejects callers whose role is not in the allowed set.
pub fn require_role(user: &CurrentUser, allowed: &[Role]) -> Result<(), Error> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(AuthError::Forbidden.into())
    }
}
