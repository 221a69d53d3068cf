use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250801_000001_practice::Practice;

static FK_AUTOMATION_LOG_PRACTICE_ID: &str = "fk_automation_log_practice_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AutomationLog::Table)
                    .if_not_exists()
                    .col(pk_uuid(AutomationLog::Id))
                    .col(uuid(AutomationLog::PracticeId))
                    .col(string(AutomationLog::AutomationType))
                    .col(string(AutomationLog::Status))
                    .col(json_binary_null(AutomationLog::Details))
                    .col(timestamp(AutomationLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AUTOMATION_LOG_PRACTICE_ID)
                    .from_tbl(AutomationLog::Table)
                    .from_col(AutomationLog::PracticeId)
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
                    .name(FK_AUTOMATION_LOG_PRACTICE_ID)
                    .table(AutomationLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AutomationLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AutomationLog {
    #[sea_orm(iden = "automation_logs")]
    Table,
    Id,
    PracticeId,
    AutomationType,
    Status,
    Details,
    CreatedAt,
}
