use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000001_practice::Practice, m20250801_000002_patient::Patient};

static FK_CLAIM_PRACTICE_ID: &str = "fk_claim_practice_id";
static FK_CLAIM_PATIENT_ID: &str = "fk_claim_patient_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Claim::Table)
                    .if_not_exists()
                    .col(pk_uuid(Claim::Id))
                    .col(uuid(Claim::PracticeId))
                    .col(uuid(Claim::PatientId))
                    .col(string_null(Claim::ExternalClaimId))
                    .col(string(Claim::InsurerName))
                    .col(string_null(Claim::TreatmentCode))
                    .col(text(Claim::TreatmentDescription))
                    .col(double(Claim::SubmittedAmount))
                    .col(double_null(Claim::ExpectedAmount))
                    .col(double_null(Claim::ReceivedAmount))
                    .col(string(Claim::Status))
                    .col(date(Claim::SubmissionDate))
                    .col(date_null(Claim::PaymentDate))
                    .col(text_null(Claim::Notes))
                    .col(timestamp(Claim::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CLAIM_PRACTICE_ID)
                    .from_tbl(Claim::Table)
                    .from_col(Claim::PracticeId)
                    .to_tbl(Practice::Table)
                    .to_col(Practice::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CLAIM_PATIENT_ID)
                    .from_tbl(Claim::Table)
                    .from_col(Claim::PatientId)
                    .to_tbl(Patient::Table)
                    .to_col(Patient::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CLAIM_PATIENT_ID)
                    .table(Claim::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CLAIM_PRACTICE_ID)
                    .table(Claim::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Claim::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Claim {
    #[sea_orm(iden = "claims")]
    Table,
    Id,
    PracticeId,
    PatientId,
    ExternalClaimId,
    InsurerName,
    TreatmentCode,
    TreatmentDescription,
    SubmittedAmount,
    ExpectedAmount,
    ReceivedAmount,
    Status,
    SubmissionDate,
    PaymentDate,
    Notes,
    CreatedAt,
}
