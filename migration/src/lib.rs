pub use sea_orm_migration::prelude::*;

mod m20250801_000001_practice;
mod m20250801_000002_patient;
mod m20250801_000003_claim;
mod m20250801_000004_alert;
mod m20250801_000005_automation_log;
mod m20250801_000006_user;
mod m20250801_000007_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_practice::Migration),
            Box::new(m20250801_000002_patient::Migration),
            Box::new(m20250801_000003_claim::Migration),
            Box::new(m20250801_000004_alert::Migration),
            Box::new(m20250801_000005_automation_log::Migration),
            Box::new(m20250801_000006_user::Migration),
            Box::new(m20250801_000007_indexes::Migration),
        ]
    }
}
