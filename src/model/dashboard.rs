use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Aggregated statistics for the dashboard view. Keys are camelCase to match
/// the payload the frontend consumes.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_claims: usize,
    pub total_revenue: f64,
    pub pending_claims: usize,
    pub active_alerts: usize,
    #[schema(value_type = Vec<Object>)]
    pub recent_claims: Vec<entity::claim::Model>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DashboardParams {
    /// Tenant filter; empty or `"null"` means all practices.
    pub practice_id: Option<String>,
}
