use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::Error;

/// The uniform success envelope: `{success, data?, message?, count?}`.
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            count: None,
        }
    }

    /// Envelope for list responses; `count` is the number of returned rows,
    /// after any in-memory filtering.
    pub fn list(data: T, count: usize) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            count: Some(count),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            count: None,
        }
    }
}

/// The uniform error envelope: `{success: false, error, details?}`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: Option<serde_json::Value>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details,
        }
    }
}

/// JSON extractor that rejects with the API's validation envelope.
///
/// Deserialization failures become a 400 instead of axum's default 422, and
/// `validator` rules run before the payload reaches the handler.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(payload) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| Error::MalformedBody(rejection.body_text()))?;

        payload.validate().map_err(Error::Validation)?;

        Ok(ValidatedJson(payload))
    }
}

pub(crate) fn default_limit() -> u64 {
    50
}

/// Parses the `practiceId` tenant filter the way the API has always accepted
/// it: absent, empty, or the literal string `"null"` all mean "no filter".
pub(crate) fn tenant_filter(raw: Option<&str>) -> Result<Option<Uuid>, Error> {
    match raw {
        None => Ok(None),
        Some(value) if value.is_empty() || value == "null" => Ok(None),
        Some(value) => value
            .parse::<Uuid>()
            .map(Some)
            .map_err(|_| Error::InvalidQuery("practiceId")),
    }
}
