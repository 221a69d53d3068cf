//! Request/response types and shared application state.
//!
//! Request DTOs carry `validator` rules mirroring the API's field contracts;
//! list-row types use sea-orm's `FromQueryResult` to project joined columns
//! into typed structs at the persistence boundary.

pub mod alert;
pub mod api;
pub mod app;
pub mod auth;
pub mod automation;
pub mod claim;
pub mod dashboard;
pub mod patient;
pub mod practice;
pub mod user;
