use axum::{extract::State, http::StatusCode, response::IntoResponse};
use bitewing::{
    controller::auth::register,
    model::{
        api::ValidatedJson,
        auth::{RegisterDto, Role},
    },
};
use bitewing_test_utils::prelude::*;

use crate::util::{response_json, test_state};

#[tokio::test]
// Registration creates the account and returns 201 with a usable token
async fn creates_account() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
    let state = test_state(test.db.clone());

    let dto = RegisterDto {
        email: "grace@example.com".to_string(),
        password: "hunter22".to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        role: Role::Billing,
        practice_id: practice.id,
    };
    let result = register(State(state.clone()), ValidatedJson(dto)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["user"]["role"], "billing");

    let token = body["data"]["token"].as_str().unwrap();
    assert!(state.token_authority.verify(token).is_ok());

    Ok(())
}

#[tokio::test]
// Registering an already-taken email is rejected with 400
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
    fixtures::insert_user(&test.db, practice.id, "grace@example.com", "staff", true).await?;
    let state = test_state(test.db.clone());

    let dto = RegisterDto {
        email: "grace@example.com".to_string(),
        password: "hunter22".to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        role: Role::Staff,
        practice_id: practice.id,
    };
    let result = register(State(state), ValidatedJson(dto)).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "User with this email already exists");

    Ok(())
}
