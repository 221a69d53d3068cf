use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use bitewing::{controller::dashboard::stats, model::dashboard::DashboardParams};
use bitewing_test_utils::prelude::*;
use chrono::NaiveDate;

use crate::util::{bearer, issue_token, response_json, test_state};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

#[tokio::test]
// The stats payload aggregates claims, revenue, and unresolved alerts with
// camelCase keys
async fn aggregates_unscoped_stats() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
    let patient = fixtures::insert_patient(&test.db, practice.id, "Ada", "Lovelace").await?;
    fixtures::insert_claim(&test.db, practice.id, patient.id, "paid", Some(120.0), date(1)).await?;
    fixtures::insert_claim(&test.db, practice.id, patient.id, "paid", Some(60.0), date(2)).await?;
    fixtures::insert_claim(&test.db, practice.id, patient.id, "pending", None, date(3)).await?;
    fixtures::insert_alert(&test.db, practice.id, "high", false).await?;
    fixtures::insert_alert(&test.db, practice.id, "low", true).await?;
    let user = fixtures::insert_user(&test.db, practice.id, "ada@example.com", "staff", true).await?;
    let state = test_state(test.db.clone());
    let token = issue_token(&state, &user);

    let result = stats(State(state), bearer(&token), Query(DashboardParams { practice_id: None })).await;

    assert!(result.is_ok());
    let body = response_json(result.unwrap().into_response()).await;
    assert_eq!(body["data"]["totalClaims"], 3);
    assert_eq!(body["data"]["totalRevenue"], 180.0);
    assert_eq!(body["data"]["pendingClaims"], 1);
    assert_eq!(body["data"]["activeAlerts"], 1);
    assert_eq!(body["data"]["recentClaims"].as_array().unwrap().len(), 3);

    Ok(())
}

#[tokio::test]
// A practiceId query param scopes every aggregate to that tenant
async fn scopes_stats_to_tenant() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let mine = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
    let other = fixtures::insert_practice(&test.db, "Lakeside Dental").await?;
    let my_patient = fixtures::insert_patient(&test.db, mine.id, "Ada", "Lovelace").await?;
    let other_patient = fixtures::insert_patient(&test.db, other.id, "Alan", "Turing").await?;
    fixtures::insert_claim(&test.db, mine.id, my_patient.id, "paid", Some(50.0), date(1)).await?;
    fixtures::insert_claim(&test.db, other.id, other_patient.id, "paid", Some(999.0), date(2))
        .await?;
    fixtures::insert_alert(&test.db, other.id, "high", false).await?;
    let user = fixtures::insert_user(&test.db, mine.id, "ada@example.com", "staff", true).await?;
    let state = test_state(test.db.clone());
    let token = issue_token(&state, &user);

    let result = stats(
        State(state),
        bearer(&token),
        Query(DashboardParams {
            practice_id: Some(mine.id.to_string()),
        }),
    )
    .await;

    let body = response_json(result.unwrap().into_response()).await;
    assert_eq!(body["data"]["totalClaims"], 1);
    assert_eq!(body["data"]["totalRevenue"], 50.0);
    assert_eq!(body["data"]["activeAlerts"], 0);

    Ok(())
}

#[tokio::test]
// A malformed practiceId is rejected with 400 before any query runs
async fn rejects_bad_tenant_filter() -> Result<(), TestError> {
    use axum::http::StatusCode;

    let test = test_setup_with_all_tables!()?;
    let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
    let user = fixtures::insert_user(&test.db, practice.id, "ada@example.com", "staff", true).await?;
    let state = test_state(test.db.clone());
    let token = issue_token(&state, &user);

    let result = stats(
        State(state),
        bearer(&token),
        Query(DashboardParams {
            practice_id: Some("not-a-uuid".to_string()),
        }),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
