use axum::{extract::State, http::StatusCode, response::IntoResponse};
use bitewing::{
    controller::practice::create,
    model::{
        api::ValidatedJson,
        practice::{CreatePracticeDto, SystemType},
    },
};
use bitewing_test_utils::prelude::*;

use crate::util::{bearer, issue_token, response_json, test_state};

fn dto(name: &str) -> CreatePracticeDto {
    CreatePracticeDto {
        name: name.to_string(),
        system_type: SystemType::EasyDental,
        api_credentials: None,
    }
}

#[tokio::test]
// An admin can create a practice and gets the row back with 201
async fn admin_creates_practice() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
    let admin = fixtures::insert_user(&test.db, practice.id, "root@example.com", "admin", true).await?;
    let state = test_state(test.db.clone());
    let token = issue_token(&state, &admin);

    let result = create(State(state), bearer(&token), ValidatedJson(dto("Lakeside Dental"))).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Lakeside Dental");

    Ok(())
}

#[tokio::test]
// Staff accounts are forbidden from creating practices
async fn staff_is_forbidden() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
    let staff = fixtures::insert_user(&test.db, practice.id, "ada@example.com", "staff", true).await?;
    let state = test_state(test.db.clone());
    let token = issue_token(&state, &staff);

    let result = create(State(state), bearer(&token), ValidatedJson(dto("Lakeside Dental"))).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}
