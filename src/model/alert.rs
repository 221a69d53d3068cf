use chrono::NaiveDateTime;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::model::api::default_limit;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateAlertDto {
    pub practice_id: Uuid,
    pub related_claim_id: Option<Uuid>,
    pub related_patient_id: Option<Uuid>,
    #[validate(length(min = 1))]
    pub alert_type: String,
    #[validate(length(min = 1))]
    pub message: String,
    pub priority: Priority,
    pub details: Option<serde_json::Value>,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct UpdateAlertDto {
    #[validate(length(min = 1))]
    pub alert_type: Option<String>,
    #[validate(length(min = 1))]
    pub message: Option<String>,
    pub priority: Option<Priority>,
    pub is_resolved: Option<bool>,
    pub details: Option<serde_json::Value>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AlertListParams {
    /// Tenant filter; empty or `"null"` means all practices.
    pub practice_id: Option<String>,
    /// Filter on resolution state, applied after the fetch.
    pub resolved: Option<bool>,
    /// Exact-match priority filter, applied after the fetch.
    pub priority: Option<Priority>,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

/// An alert row joined with the related patient's name and the practice name.
#[derive(Clone, Debug, Serialize, FromQueryResult, ToSchema)]
pub struct AlertRow {
    pub id: Uuid,
    pub practice_id: Uuid,
    pub related_claim_id: Option<Uuid>,
    pub related_patient_id: Option<Uuid>,
    pub alert_type: String,
    pub message: String,
    pub priority: String,
    pub is_resolved: bool,
    pub details: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub practice_name: Option<String>,
}
