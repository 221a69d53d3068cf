//! Bitewing backend core modules.
//!
//! This crate contains all server-side functionality for the Bitewing dental
//! billing platform, including HTTP routing, token-based authentication,
//! database operations, and tenant-scoped dashboard aggregation. Practices,
//! patients, claims, alerts, automation logs, and staff accounts are exposed
//! over a JSON REST API.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
