use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250801_000001_practice::Practice;

static FK_PATIENT_PRACTICE_ID: &str = "fk_patient_practice_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patient::Table)
                    .if_not_exists()
                    .col(pk_uuid(Patient::Id))
                    .col(uuid(Patient::PracticeId))
                    .col(string_null(Patient::ExternalId))
                    .col(string(Patient::FirstName))
                    .col(string(Patient::LastName))
                    .col(string_null(Patient::Email))
                    .col(string_null(Patient::Phone))
                    .col(json_binary_null(Patient::InsuranceInfo))
                    .col(timestamp(Patient::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PATIENT_PRACTICE_ID)
                    .from_tbl(Patient::Table)
                    .from_col(Patient::PracticeId)
                    .to_tbl(Practice::Table)
                    .to_col(Practice::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PATIENT_PRACTICE_ID)
                    .table(Patient::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Patient::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Patient {
    #[sea_orm(iden = "patients")]
    Table,
    Id,
    PracticeId,
    ExternalId,
    FirstName,
    LastName,
    Email,
    Phone,
    InsuranceInfo,
    CreatedAt,
}
