/// sea-orm backed store.
pub mod sql;

use crate::dao::models::{GameChanges, GameEntity, NewGame};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer for catalog entries.
///
/// Every mutating call runs in its own transaction: on error nothing is persisted.
pub trait GameStore: Send + Sync {
    /// Insert a new game, rejecting a second entry for the same `(name, platform)`.
    fn add_game(&self, game: NewGame) -> BoxFuture<'static, StorageResult<GameEntity>>;
    /// Every stored game, ordered by id. Empty is not an error.
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Apply the supplied commerce fields and return the persisted row.
    fn update_game(
        &self,
        id: i32,
        changes: GameChanges,
    ) -> BoxFuture<'static, StorageResult<GameEntity>>;
    /// Remove a single game by id.
    fn delete_game(&self, id: i32) -> BoxFuture<'static, StorageResult<()>>;
    /// Cheap round-trip to the backend.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Release the underlying connections.
    fn close(&self) -> BoxFuture<'static, StorageResult<()>>;
}
