//! Catalog operations behind the public game routes. Each call is one storage
//! transaction; this layer only normalizes input and logs outcomes.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::{
    dao::{
        models::{GameChanges, NewGame},
        storage::StorageError,
    },
    dto::game::{
        CreateGameRequest, GameDeleteResponse, GameListResponse, GameView, UpdateGameRequest,
    },
    error::ServiceError,
    state::SharedState,
};

/// Add a game to the catalog and return its stored representation.
pub async fn add_game(
    state: &SharedState,
    request: CreateGameRequest,
) -> Result<GameView, ServiceError> {
    let game = build_new_game(request)?;

    match state.game_store().add_game(game).await {
        Ok(created) => {
            info!(
                id = created.id,
                name = %created.name,
                platform = %created.platform,
                "game added"
            );
            Ok(created.into())
        }
        Err(err @ StorageError::Duplicate { .. }) => {
            warn!(error = %err, "rejected duplicate game");
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Every stored game. An empty catalog is a valid, empty answer.
pub async fn list_games(state: &SharedState) -> Result<GameListResponse, ServiceError> {
    let games = state.game_store().list_games().await?;
    Ok(games.into())
}

/// Change the commerce fields of an existing game.
pub async fn update_game(
    state: &SharedState,
    id: i32,
    request: UpdateGameRequest,
) -> Result<GameView, ServiceError> {
    let changes = build_changes(request)?;
    let updated = state.game_store().update_game(id, changes).await?;
    info!(id, "game updated");
    Ok(updated.into())
}

/// Remove a game from the catalog.
pub async fn delete_game(state: &SharedState, id: i32) -> Result<GameDeleteResponse, ServiceError> {
    state.game_store().delete_game(id).await?;
    info!(id, "game removed");
    Ok(GameDeleteResponse::removed(id))
}

/// Trims text fields and rejects blank ones, whatever the caller validated.
fn build_new_game(request: CreateGameRequest) -> Result<NewGame, ServiceError> {
    let CreateGameRequest {
        name,
        platform,
        release_date,
        developer,
        price,
        stock,
    } = request;

    let name = required_text("name", name)?;
    let platform = required_text("platform", platform)?;
    let developer = required_text("developer", developer)?;
    let GameChanges { price, stock } = build_changes(UpdateGameRequest { price, stock })?;

    Ok(NewGame {
        name,
        platform,
        release_date,
        developer,
        price,
        stock,
    })
}

/// Routes validate the DTO first; this repeats the checks for callers of the
/// library API that bypass the HTTP layer.
fn build_changes(request: UpdateGameRequest) -> Result<GameChanges, ServiceError> {
    if request.price.is_some_and(|price| price < Decimal::ZERO) {
        return Err(ServiceError::InvalidInput(
            "price must be zero or positive".into(),
        ));
    }

    if request.stock.is_some_and(|stock| stock < 0) {
        return Err(ServiceError::InvalidInput(
            "stock must be zero or positive".into(),
        ));
    }

    Ok(request.into())
}

fn required_text(field: &str, value: String) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidInput(format!(
            "{field} must not be empty"
        )));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::{
        dao::game_store::sql::{SqlConfig, SqlGameStore},
        state::AppState,
    };

    async fn memory_state() -> SharedState {
        let store = SqlGameStore::connect(SqlConfig::in_memory())
            .await
            .expect("in-memory store");
        AppState::new(
            Arc::new(store),
            None,
            #[cfg(feature = "catalog-import")]
            crate::dao::catalog::CatalogClient::new(Default::default()).expect("catalog client"),
        )
    }

    fn request(name: &str, platform: &str) -> CreateGameRequest {
        CreateGameRequest {
            name: name.into(),
            platform: platform.into(),
            release_date: NaiveDate::from_ymd_opt(1995, 3, 11).unwrap(),
            developer: "Square".into(),
            price: None,
            stock: None,
        }
    }

    #[test]
    fn new_game_fields_are_trimmed() {
        let game = build_new_game(request("  Chrono Trigger ", "SNES\n")).unwrap();
        assert_eq!(game.name, "Chrono Trigger");
        assert_eq!(game.platform, "SNES");
        assert_eq!(game.developer, "Square");
    }

    #[test]
    fn blank_text_fields_are_invalid() {
        let err = build_new_game(request("Chrono Trigger", "   ")).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(message) if message.contains("platform")));
    }

    #[test]
    fn negative_commerce_values_are_invalid() {
        let err = build_changes(UpdateGameRequest {
            price: Some(Decimal::new(-5, 0)),
            stock: None,
        })
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));

        let err = build_changes(UpdateGameRequest {
            price: None,
            stock: Some(-1),
        })
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn chrono_trigger_is_added_once() {
        let state = memory_state().await;

        let view = add_game(&state, request("Chrono Trigger", "SNES"))
            .await
            .unwrap();
        assert_eq!(view.name, "Chrono Trigger");

        let listed = list_games(&state).await.unwrap();
        assert_eq!(listed.games, vec![view]);

        let err = add_game(&state, request("Chrono Trigger", "SNES"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Storage(StorageError::Duplicate { .. })
        ));
    }

    #[tokio::test]
    async fn trimmed_duplicate_is_still_a_duplicate() {
        let state = memory_state().await;
        add_game(&state, request("Chrono Trigger", "SNES"))
            .await
            .unwrap();

        let err = add_game(&state, request(" Chrono Trigger", "SNES "))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Storage(StorageError::Duplicate { .. })
        ));
    }

    #[tokio::test]
    async fn delete_reports_removed_id() {
        let state = memory_state().await;
        let view = add_game(&state, request("Chrono Trigger", "SNES"))
            .await
            .unwrap();

        let response = delete_game(&state, view.game_id).await.unwrap();
        assert_eq!(response.game_id, view.game_id);
        assert!(list_games(&state).await.unwrap().games.is_empty());

        let err = delete_game(&state, view.game_id).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Storage(StorageError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn in_process_callers_cannot_store_negative_stock() {
        let state = memory_state().await;

        let err = add_game(
            &state,
            CreateGameRequest {
                stock: Some(-3),
                ..request("Chrono Trigger", "SNES")
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidInput(message) if message.contains("stock")));
        assert!(list_games(&state).await.unwrap().games.is_empty());
    }
}
