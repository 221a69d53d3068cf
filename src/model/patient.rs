use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::model::api::default_limit;

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreatePatientDto {
    pub practice_id: Uuid,
    pub external_id: Option<String>,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 10))]
    pub phone: Option<String>,
    pub insurance_info: Option<serde_json::Value>,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct UpdatePatientDto {
    pub external_id: Option<String>,
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 10))]
    pub phone: Option<String>,
    pub insurance_info: Option<serde_json::Value>,
}

impl UpdatePatientDto {
    pub fn is_empty(&self) -> bool {
        self.external_id.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.insurance_info.is_none()
    }
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PatientListParams {
    /// Tenant filter; empty or `"null"` means all practices.
    pub practice_id: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}
