//! Record access layer: one repository per entity.
//!
//! Repositories borrow the connection, return `Result<_, DbErr>`, and leave
//! HTTP concerns (status codes, envelopes) to the controllers. Every query
//! goes through [`timed`] so slow statements show up in the logs with the
//! operation name attached.

pub mod alert;
pub mod automation_log;
pub mod claim;
pub mod patient;
pub mod practice;
pub mod user;

use std::time::Instant;

use sea_orm::DbErr;
use tracing::{debug, warn};

/// Runs a database operation, logging its name and elapsed time.
pub async fn timed<T, F>(op: &'static str, fut: F) -> Result<T, DbErr>
where
    F: std::future::Future<Output = Result<T, DbErr>>,
{
    let start = Instant::now();
    let result = fut.await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(_) => debug!(op, elapsed_ms, "query completed"),
        Err(error) => warn!(op, elapsed_ms, %error, "query failed"),
    }

    result
}
