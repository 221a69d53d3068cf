//! Tests for HTTP controller endpoints.
//!
//! These drive the handlers directly with their extractors against an
//! in-memory SQLite database, covering authentication flows, response
//! envelopes, role gating, and tenant scoping.

mod auth;
mod claim;
mod dashboard;
mod practice;
