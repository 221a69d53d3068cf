//! HTTP controller endpoints for the Bitewing API.
//!
//! Handlers authenticate through the utilities in [`util::auth`], validate
//! bodies with the `ValidatedJson` extractor, delegate to services and
//! repositories, and wrap results in the uniform response envelope. Each
//! handler carries its OpenAPI annotation via utoipa.

pub mod alert;
pub mod auth;
pub mod automation;
pub mod claim;
pub mod dashboard;
pub mod health;
pub mod patient;
pub mod practice;
pub mod user;
pub mod util;
