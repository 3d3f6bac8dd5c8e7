//! Schema migrations for the game catalog database.

pub use sea_orm_migration::prelude::*;

mod m20250310_000001_create_games_table;
mod m20250322_000002_add_commerce_fields;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_000001_create_games_table::Migration),
            Box::new(m20250322_000002_add_commerce_fields::Migration),
        ]
    }
}

/// Column identifiers of the `games` table shared by every migration.
#[derive(DeriveIden)]
pub(crate) enum Games {
    Table,
    Id,
    Name,
    Platform,
    ReleaseDate,
    Developer,
    Price,
    Stock,
}
