use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250801_000001_practice::Practice;

static FK_USER_PRACTICE_ID: &str = "fk_user_practice_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_uuid(User::Id))
                    .col(uuid(User::PracticeId))
                    .col(string_uniq(User::Email))
                    .col(string(User::PasswordHash))
                    .col(string(User::Role))
                    .col(string_null(User::FirstName))
                    .col(string_null(User::LastName))
                    .col(boolean(User::IsActive).default(true))
                    .col(timestamp(User::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_PRACTICE_ID)
                    .from_tbl(User::Table)
                    .from_col(User::PracticeId)
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
                    .name(FK_USER_PRACTICE_ID)
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    PracticeId,
    Email,
    PasswordHash,
    Role,
    FirstName,
    LastName,
    IsActive,
    CreatedAt,
}
