use chrono::NaiveDateTime;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::model::api::default_limit;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AutomationStatus {
    Completed,
    Failed,
    Pending,
}

impl AutomationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Pending => "pending",
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateAutomationLogDto {
    pub practice_id: Uuid,
    #[validate(length(min = 1))]
    pub automation_type: String,
    pub status: AutomationStatus,
    pub details: Option<serde_json::Value>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AutomationListParams {
    /// Tenant filter; empty or `"null"` means all practices.
    pub practice_id: Option<String>,
    /// Exact-match automation-type filter, applied after the fetch.
    #[serde(rename = "type")]
    pub automation_type: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

/// An automation-log row joined with the practice name.
#[derive(Clone, Debug, Serialize, FromQueryResult, ToSchema)]
pub struct AutomationLogRow {
    pub id: Uuid,
    pub practice_id: Uuid,
    pub automation_type: String,
    pub status: String,
    pub details: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
    pub practice_name: Option<String>,
}
