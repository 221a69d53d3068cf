use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use bitewing::{
    controller::{auth::login, claim::list},
    model::{
        api::ValidatedJson,
        auth::LoginDto,
        claim::{ClaimListParams, ClaimStatus},
    },
};
use bitewing_test_utils::prelude::*;
use chrono::NaiveDate;

use crate::util::{bearer, issue_token, response_json, test_state};

fn params(practice_id: Option<String>, status: Option<ClaimStatus>) -> ClaimListParams {
    ClaimListParams {
        practice_id,
        status,
        limit: 50,
        offset: 0,
    }
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

#[tokio::test]
// A token obtained from login authorizes the claims list, and the tenant
// filter returns only the requested practice's claims
async fn login_token_scopes_claims_to_tenant() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let mine = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
    let other = fixtures::insert_practice(&test.db, "Lakeside Dental").await?;
    let my_patient = fixtures::insert_patient(&test.db, mine.id, "Ada", "Lovelace").await?;
    let other_patient = fixtures::insert_patient(&test.db, other.id, "Alan", "Turing").await?;
    fixtures::insert_claim(&test.db, mine.id, my_patient.id, "pending", None, date(1)).await?;
    fixtures::insert_claim(&test.db, other.id, other_patient.id, "paid", Some(80.0), date(2))
        .await?;
    fixtures::insert_user(&test.db, mine.id, "ada@example.com", "staff", true).await?;
    let state = test_state(test.db.clone());

    let dto = LoginDto {
        email: "ada@example.com".to_string(),
        password: TEST_PASSWORD.to_string(),
    };
    let login_response = login(State(state.clone()), ValidatedJson(dto))
        .await
        .unwrap()
        .into_response();
    let token = response_json(login_response).await["data"]["token"]
        .as_str()
        .unwrap()
        .to_string();

    let result = list(
        State(state),
        bearer(&token),
        Query(params(Some(mine.id.to_string()), None)),
    )
    .await;

    assert!(result.is_ok());
    let body = response_json(result.unwrap().into_response()).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["first_name"], "Ada");
    assert_eq!(body["data"][0]["practice_name"], "Sunrise Dental");

    Ok(())
}

#[tokio::test]
// Without a tenant filter all claims come back, newest submission first,
// and the status filter narrows the already-fetched page
async fn orders_and_filters_by_status() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
    let patient = fixtures::insert_patient(&test.db, practice.id, "Ada", "Lovelace").await?;
    fixtures::insert_claim(&test.db, practice.id, patient.id, "pending", None, date(1)).await?;
    fixtures::insert_claim(&test.db, practice.id, patient.id, "paid", Some(90.0), date(3)).await?;
    fixtures::insert_claim(&test.db, practice.id, patient.id, "pending", None, date(2)).await?;
    let user = fixtures::insert_user(&test.db, practice.id, "ada@example.com", "staff", true).await?;
    let state = test_state(test.db.clone());
    let token = issue_token(&state, &user);

    let result = list(State(state.clone()), bearer(&token), Query(params(None, None))).await;
    let body = response_json(result.unwrap().into_response()).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["data"][0]["submission_date"], "2025-06-03");

    let result = list(
        State(state),
        bearer(&token),
        Query(params(None, Some(ClaimStatus::Pending))),
    )
    .await;
    let body = response_json(result.unwrap().into_response()).await;
    assert_eq!(body["count"], 2);

    Ok(())
}

#[tokio::test]
// Listing without a token is rejected with 401
async fn rejects_unauthenticated() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let state = test_state(test.db.clone());

    let result = list(State(state), HeaderMap::new(), Query(params(None, None))).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
