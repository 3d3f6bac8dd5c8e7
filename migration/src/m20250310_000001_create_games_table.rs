use sea_orm_migration::prelude::*;

use crate::Games;

/// Name of the index enforcing one catalog entry per `(name, platform)` pair.
pub const NAME_PLATFORM_INDEX: &str = "idx_games_name_platform";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::Name).string().not_null())
                    .col(ColumnDef::new(Games::Platform).string().not_null())
                    .col(ColumnDef::new(Games::ReleaseDate).date().not_null())
                    .col(ColumnDef::new(Games::Developer).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(NAME_PLATFORM_INDEX)
                    .table(Games::Table)
                    .col(Games::Name)
                    .col(Games::Platform)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(NAME_PLATFORM_INDEX)
                    .table(Games::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}
