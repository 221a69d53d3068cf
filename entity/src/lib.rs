//! Database entity definitions.
//!
//! One module per table. Every row is represented by a typed model constructed
//! at the persistence boundary; nothing above the data layer sees raw rows.

pub mod alert;
pub mod automation_log;
pub mod claim;
pub mod patient;
pub mod practice;
pub mod prelude;
pub mod user;
