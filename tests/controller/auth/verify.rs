use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use bitewing::controller::auth::verify;
use bitewing_test_utils::prelude::*;

use crate::util::{bearer, issue_token, response_json, test_state};

#[tokio::test]
// A freshly issued token verifies and echoes the current user
async fn accepts_valid_token() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
    let user = fixtures::insert_user(&test.db, practice.id, "ada@example.com", "admin", true).await?;
    let state = test_state(test.db.clone());
    let token = issue_token(&state, &user);

    let result = verify(State(state), bearer(&token)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["data"]["valid"], true);
    assert_eq!(body["data"]["user"]["email"], "ada@example.com");

    Ok(())
}

#[tokio::test]
// A request without any Authorization header is rejected with 401
async fn rejects_missing_token() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let state = test_state(test.db.clone());

    let result = verify(State(state), HeaderMap::new()).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
// A token for an account deactivated after issuance no longer verifies
async fn rejects_deactivated_account() -> Result<(), TestError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = test_setup_with_all_tables!()?;
    let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
    let user = fixtures::insert_user(&test.db, practice.id, "ada@example.com", "staff", true).await?;
    let state = test_state(test.db.clone());
    let token = issue_token(&state, &user);

    let mut account = entity::user::ActiveModel::from(user);
    account.is_active = ActiveValue::Set(false);
    account.update(&test.db).await.map_err(TestError::DbErr)?;

    let result = verify(State(state), bearer(&token)).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
