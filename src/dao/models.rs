use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Persisted catalog entry as returned by the storage layer.
pub type GameEntity = super::entity::games::Model;

/// Fully validated payload for inserting a new catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    /// Title of the game; part of the `(name, platform)` uniqueness key.
    pub name: String,
    /// Platform the copy runs on (e.g. "SNES").
    pub platform: String,
    /// First release date.
    pub release_date: NaiveDate,
    /// Studio credited for the game.
    pub developer: String,
    /// Sale price, never negative.
    pub price: Option<Decimal>,
    /// Units in stock, never negative.
    pub stock: Option<i32>,
}

/// Partial update restricted to the commerce fields of a game.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameChanges {
    /// New sale price.
    pub price: Option<Decimal>,
    /// New stock level.
    pub stock: Option<i32>,
}

impl GameChanges {
    /// True when the update does not touch any column.
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.stock.is_none()
    }
}
