use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Practice::Table)
                    .if_not_exists()
                    .col(pk_uuid(Practice::Id))
                    .col(string(Practice::Name))
                    .col(string(Practice::SystemType))
                    .col(json_binary_null(Practice::ApiCredentials))
                    .col(timestamp(Practice::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Practice::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Practice {
    #[sea_orm(iden = "practices")]
    Table,
    Id,
    Name,
    SystemType,
    ApiCredentials,
    CreatedAt,
}
