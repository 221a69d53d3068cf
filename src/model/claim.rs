use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::model::api::default_limit;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Pending,
    Paid,
    Underpaid,
    Unpaid,
    Rejected,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Underpaid => "underpaid",
            Self::Unpaid => "unpaid",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateClaimDto {
    pub practice_id: Uuid,
    pub patient_id: Uuid,
    pub external_claim_id: Option<String>,
    #[validate(length(min = 1))]
    pub insurer_name: String,
    pub treatment_code: Option<String>,
    #[validate(length(min = 1))]
    pub treatment_description: String,
    #[validate(range(min = 0.0))]
    pub submitted_amount: f64,
    #[validate(range(min = 0.0))]
    pub expected_amount: Option<f64>,
    #[validate(range(min = 0.0))]
    pub received_amount: Option<f64>,
    pub status: Option<ClaimStatus>,
    pub submission_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct UpdateClaimDto {
    #[validate(length(min = 1))]
    pub insurer_name: Option<String>,
    pub treatment_code: Option<String>,
    #[validate(length(min = 1))]
    pub treatment_description: Option<String>,
    #[validate(range(min = 0.0))]
    pub submitted_amount: Option<f64>,
    #[validate(range(min = 0.0))]
    pub expected_amount: Option<f64>,
    #[validate(range(min = 0.0))]
    pub received_amount: Option<f64>,
    pub status: Option<ClaimStatus>,
    pub payment_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl UpdateClaimDto {
    pub fn is_empty(&self) -> bool {
        self.insurer_name.is_none()
            && self.treatment_code.is_none()
            && self.treatment_description.is_none()
            && self.submitted_amount.is_none()
            && self.expected_amount.is_none()
            && self.received_amount.is_none()
            && self.status.is_none()
            && self.payment_date.is_none()
            && self.notes.is_none()
    }
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ClaimListParams {
    /// Tenant filter; empty or `"null"` means all practices.
    pub practice_id: Option<String>,
    /// Exact-match status filter, applied after the fetch.
    pub status: Option<ClaimStatus>,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

/// A claim row joined with the patient's name and the practice name, the
/// shape list and detail endpoints return.
#[derive(Clone, Debug, Serialize, FromQueryResult, ToSchema)]
pub struct ClaimRow {
    pub id: Uuid,
    pub practice_id: Uuid,
    pub patient_id: Uuid,
    pub external_claim_id: Option<String>,
    pub insurer_name: String,
    pub treatment_code: Option<String>,
    pub treatment_description: String,
    pub submitted_amount: f64,
    pub expected_amount: Option<f64>,
    pub received_amount: Option<f64>,
    pub status: String,
    pub submission_date: NaiveDate,
    pub payment_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub practice_name: Option<String>,
}
