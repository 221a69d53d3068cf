use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Practice-management systems a practice can be connected to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SystemType {
    EasyDental,
    Dentemax,
}

impl SystemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EasyDental => "easy_dental",
            Self::Dentemax => "dentemax",
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreatePracticeDto {
    #[validate(length(min = 1))]
    pub name: String,
    pub system_type: SystemType,
    pub api_credentials: Option<serde_json::Value>,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct UpdatePracticeDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub system_type: Option<SystemType>,
    pub api_credentials: Option<serde_json::Value>,
}

impl UpdatePracticeDto {
    /// True when no field was provided, meaning there is nothing to persist.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.system_type.is_none() && self.api_credentials.is_none()
    }
}
