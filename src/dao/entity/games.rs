//! Row of the `games` table.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Stored game; `(name, platform)` is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    /// Auto-incremented identifier.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Title, trimmed.
    pub name: String,
    /// Platform, trimmed.
    pub platform: String,
    /// First release date.
    pub release_date: NaiveDate,
    /// Credited studio.
    pub developer: String,
    /// Asking price.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub price: Option<Decimal>,
    /// Units on hand.
    pub stock: Option<i32>,
}

/// The table has no relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
