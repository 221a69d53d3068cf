use sea_orm_migration::prelude::*;

use crate::{
    m20250801_000002_patient::Patient, m20250801_000003_claim::Claim,
    m20250801_000004_alert::Alert, m20250801_000005_automation_log::AutomationLog,
    m20250801_000006_user::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Secondary indexes for the hot lookup paths: tenant filters, status
/// filters, the unresolved-alert scan, and the claims recency sort.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let indexes: Vec<IndexCreateStatement> = vec![
            Index::create()
                .name("idx_claims_practice_id")
                .table(Claim::Table)
                .col(Claim::PracticeId)
                .to_owned(),
            Index::create()
                .name("idx_claims_status")
                .table(Claim::Table)
                .col(Claim::Status)
                .to_owned(),
            Index::create()
                .name("idx_claims_insurer")
                .table(Claim::Table)
                .col(Claim::InsurerName)
                .to_owned(),
            Index::create()
                .name("idx_claims_submission_date")
                .table(Claim::Table)
                .col(Claim::SubmissionDate)
                .to_owned(),
            Index::create()
                .name("idx_patients_practice_id")
                .table(Patient::Table)
                .col(Patient::PracticeId)
                .to_owned(),
            Index::create()
                .name("idx_patients_name")
                .table(Patient::Table)
                .col(Patient::LastName)
                .col(Patient::FirstName)
                .to_owned(),
            Index::create()
                .name("idx_alerts_practice_id")
                .table(Alert::Table)
                .col(Alert::PracticeId)
                .to_owned(),
            Index::create()
                .name("idx_alerts_resolved")
                .table(Alert::Table)
                .col(Alert::IsResolved)
                .to_owned(),
            Index::create()
                .name("idx_alerts_claim_id")
                .table(Alert::Table)
                .col(Alert::RelatedClaimId)
                .to_owned(),
            Index::create()
                .name("idx_alerts_priority")
                .table(Alert::Table)
                .col(Alert::Priority)
                .to_owned(),
            Index::create()
                .name("idx_users_practice_id")
                .table(User::Table)
                .col(User::PracticeId)
                .to_owned(),
            Index::create()
                .name("idx_users_active")
                .table(User::Table)
                .col(User::IsActive)
                .to_owned(),
            Index::create()
                .name("idx_automation_logs_practice_id")
                .table(AutomationLog::Table)
                .col(AutomationLog::PracticeId)
                .to_owned(),
            Index::create()
                .name("idx_automation_logs_type")
                .table(AutomationLog::Table)
                .col(AutomationLog::AutomationType)
                .to_owned(),
            Index::create()
                .name("idx_automation_logs_created_at")
                .table(AutomationLog::Table)
                .col(AutomationLog::CreatedAt)
                .to_owned(),
        ];

        for index in indexes {
            manager.create_index(index).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table) in [
            ("idx_claims_practice_id", Claim::Table.into_table_ref()),
            ("idx_claims_status", Claim::Table.into_table_ref()),
            ("idx_claims_insurer", Claim::Table.into_table_ref()),
            ("idx_claims_submission_date", Claim::Table.into_table_ref()),
            ("idx_patients_practice_id", Patient::Table.into_table_ref()),
            ("idx_patients_name", Patient::Table.into_table_ref()),
            ("idx_alerts_practice_id", Alert::Table.into_table_ref()),
            ("idx_alerts_resolved", Alert::Table.into_table_ref()),
            ("idx_alerts_claim_id", Alert::Table.into_table_ref()),
            ("idx_alerts_priority", Alert::Table.into_table_ref()),
            ("idx_users_practice_id", User::Table.into_table_ref()),
            ("idx_users_active", User::Table.into_table_ref()),
            (
                "idx_automation_logs_practice_id",
                AutomationLog::Table.into_table_ref(),
            ),
            ("idx_automation_logs_type", AutomationLog::Table.into_table_ref()),
            (
                "idx_automation_logs_created_at",
                AutomationLog::Table.into_table_ref(),
            ),
        ] {
            manager
                .drop_index(Index::drop().name(name).table(table).to_owned())
                .await?;
        }

        Ok(())
    }
}
