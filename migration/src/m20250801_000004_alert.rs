use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250801_000001_practice::Practice, m20250801_000002_patient::Patient,
    m20250801_000003_claim::Claim,
};

static FK_ALERT_PRACTICE_ID: &str = "fk_alert_practice_id";
static FK_ALERT_RELATED_CLAIM_ID: &str = "fk_alert_related_claim_id";
static FK_ALERT_RELATED_PATIENT_ID: &str = "fk_alert_related_patient_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alert::Table)
                    .if_not_exists()
                    .col(pk_uuid(Alert::Id))
                    .col(uuid(Alert::PracticeId))
                    .col(uuid_null(Alert::RelatedClaimId))
                    .col(uuid_null(Alert::RelatedPatientId))
                    .col(string(Alert::AlertType))
                    .col(text(Alert::Message))
                    .col(string(Alert::Priority))
                    .col(boolean(Alert::IsResolved).default(false))
                    .col(json_binary_null(Alert::Details))
                    .col(timestamp(Alert::CreatedAt))
                    .col(timestamp(Alert::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALERT_PRACTICE_ID)
                    .from_tbl(Alert::Table)
                    .from_col(Alert::PracticeId)
                    .to_tbl(Practice::Table)
                    .to_col(Practice::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALERT_RELATED_CLAIM_ID)
                    .from_tbl(Alert::Table)
                    .from_col(Alert::RelatedClaimId)
                    .to_tbl(Claim::Table)
                    .to_col(Claim::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALERT_RELATED_PATIENT_ID)
                    .from_tbl(Alert::Table)
                    .from_col(Alert::RelatedPatientId)
                    .to_tbl(Patient::Table)
                    .to_col(Patient::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            FK_ALERT_RELATED_PATIENT_ID,
            FK_ALERT_RELATED_CLAIM_ID,
            FK_ALERT_PRACTICE_ID,
        ] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(name).table(Alert::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Alert::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Alert {
    #[sea_orm(iden = "alerts")]
    Table,
    Id,
    PracticeId,
    RelatedClaimId,
    RelatedPatientId,
    AlertType,
    Message,
    Priority,
    IsResolved,
    Details,
    CreatedAt,
    UpdatedAt,
}
