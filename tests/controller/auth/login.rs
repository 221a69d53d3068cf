use axum::{extract::State, http::StatusCode, response::IntoResponse};
use bitewing::{
    controller::auth::login,
    model::{api::ValidatedJson, auth::LoginDto},
};
use bitewing_test_utils::prelude::*;

use crate::util::{response_json, test_state};

#[tokio::test]
// Correct credentials return the user (without hash) and a token
async fn succeeds_with_correct_credentials() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
    fixtures::insert_user(&test.db, practice.id, "ada@example.com", "staff", true).await?;
    let state = test_state(test.db.clone());

    let dto = LoginDto {
        email: "ada@example.com".to_string(),
        password: TEST_PASSWORD.to_string(),
    };
    let result = login(State(state), ValidatedJson(dto)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["user"]["email"], "ada@example.com");
    assert!(body["data"]["user"].get("password_hash").is_none());
    assert!(body["data"]["token"].as_str().is_some_and(|t| !t.is_empty()));

    Ok(())
}

#[tokio::test]
// A wrong password is rejected with 401
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
    fixtures::insert_user(&test.db, practice.id, "ada@example.com", "staff", true).await?;
    let state = test_state(test.db.clone());

    let dto = LoginDto {
        email: "ada@example.com".to_string(),
        password: "not the password".to_string(),
    };
    let result = login(State(state), ValidatedJson(dto)).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
// A deactivated account cannot log in even with the right password
async fn rejects_deactivated_account() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
    fixtures::insert_user(&test.db, practice.id, "ada@example.com", "staff", false).await?;
    let state = test_state(test.db.clone());

    let dto = LoginDto {
        email: "ada@example.com".to_string(),
        password: TEST_PASSWORD.to_string(),
    };
    let result = login(State(state), ValidatedJson(dto)).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
