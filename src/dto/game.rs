use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationErrors};

use crate::dao::models::{GameChanges, GameEntity};
use crate::dto::validation::{
    validate_non_negative_price, validate_non_negative_stock, validate_not_blank,
};

/// Payload used to add a new game to the catalog.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateGameRequest {
    /// Title of the game.
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Chrono Trigger")]
    pub name: String,
    /// Platform the copy runs on.
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "SNES")]
    pub platform: String,
    /// First release date, `YYYY-MM-DD`.
    #[schema(example = "1995-03-11")]
    pub release_date: NaiveDate,
    /// Studio credited for the game.
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Square")]
    pub developer: String,
    /// Asking price, zero or positive.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>, minimum = 0, example = 59.9)]
    #[validate(custom(function = "validate_non_negative_price"))]
    pub price: Option<Decimal>,
    /// Units on hand, zero or positive.
    #[serde(default)]
    #[schema(minimum = 0, example = 4)]
    #[validate(custom(function = "validate_non_negative_stock"))]
    pub stock: Option<i32>,
}

/// Partial update of the commerce fields. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateGameRequest {
    /// New price, zero or positive.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>, minimum = 0)]
    pub price: Option<Decimal>,
    /// New stock count, zero or positive.
    #[serde(default)]
    #[schema(minimum = 0)]
    pub stock: Option<i32>,
}

impl Validate for UpdateGameRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(ref price) = self.price {
            if let Err(e) = validate_non_negative_price(price) {
                errors.add("price", e);
            }
        }

        if let Some(stock) = self.stock {
            if let Err(e) = validate_non_negative_stock(&stock) {
                errors.add("stock", e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<UpdateGameRequest> for GameChanges {
    fn from(request: UpdateGameRequest) -> Self {
        Self {
            price: request.price,
            stock: request.stock,
        }
    }
}

/// Query string identifying the game to delete.
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GameDeleteQuery {
    /// Identifier of the game to remove.
    pub game_id: i32,
}

/// External representation of a single game.
///
/// Mirrors the stored columns one to one; `id` is exposed as `game_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GameView {
    /// Storage identifier.
    pub game_id: i32,
    /// Title of the game.
    pub name: String,
    /// Platform the copy runs on.
    pub platform: String,
    /// First release date.
    pub release_date: NaiveDate,
    /// Studio credited for the game.
    pub developer: String,
    /// Asking price, `null` when unknown.
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    /// Units on hand, `null` when unknown.
    pub stock: Option<i32>,
}

/// Every game of the catalog.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GameListResponse {
    /// Stored games ordered by identifier.
    pub games: Vec<GameView>,
}

/// Confirmation returned after a game has been removed.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameDeleteResponse {
    /// Confirmation text.
    pub message: String,
    /// Identifier of the removed game.
    pub game_id: i32,
}

impl GameDeleteResponse {
    /// Confirmation for the game stored under `game_id`.
    pub fn removed(game_id: i32) -> Self {
        Self {
            message: "Game removed successfully from the collection".into(),
            game_id,
        }
    }
}

impl From<GameEntity> for GameView {
    fn from(game: GameEntity) -> Self {
        Self {
            game_id: game.id,
            name: game.name,
            platform: game.platform,
            release_date: game.release_date,
            developer: game.developer,
            price: game.price,
            stock: game.stock,
        }
    }
}

impl From<Vec<GameEntity>> for GameListResponse {
    fn from(games: Vec<GameEntity>) -> Self {
        Self {
            games: games.into_iter().map(Into::into).collect(),
        }
    }
}
