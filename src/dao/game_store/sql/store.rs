use futures::future::BoxFuture;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait, sea_query::Expr,
};
use tracing::{debug, info};

use super::{
    config::SqlConfig,
    connection::establish_connection,
    error::{SqlDaoError, SqlResult},
};
use crate::dao::{
    entity::{games, prelude::Games},
    game_store::GameStore,
    models::{GameChanges, GameEntity, NewGame},
    storage::StorageResult,
};

/// [`GameStore`] backed by a sea-orm connection pool.
#[derive(Clone)]
pub struct SqlGameStore {
    db: DatabaseConnection,
}

impl SqlGameStore {
    /// Open the database described by `config` and bring its schema up to date.
    pub async fn connect(config: SqlConfig) -> SqlResult<Self> {
        let db = establish_connection(&config).await?;
        Migrator::up(&db, None)
            .await
            .map_err(|source| SqlDaoError::Migrate { source })?;

        info!(url = %config.url, "database ready");
        Ok(Self { db })
    }

    /// Insert through the unique `(name, platform)` index.
    ///
    /// The INSERT must stay the first statement of the transaction: SQLite fails a
    /// read-then-write transaction with `SQLITE_BUSY` when another writer holds the lock.
    async fn insert_game(&self, game: NewGame) -> SqlResult<GameEntity> {
        let txn = self.db.begin().await.map_err(|source| SqlDaoError::Transaction {
            action: "begin",
            source,
        })?;

        let model = games::ActiveModel {
            id: NotSet,
            name: Set(game.name.clone()),
            platform: Set(game.platform.clone()),
            release_date: Set(game.release_date),
            developer: Set(game.developer.clone()),
            price: Set(game.price),
            stock: Set(game.stock),
        }
        .insert(&txn)
        .await
        .map_err(|source| insert_error(&game, source))?;

        txn.commit().await.map_err(|source| SqlDaoError::Transaction {
            action: "commit",
            source,
        })?;

        debug!(id = model.id, name = %model.name, platform = %model.platform, "game inserted");
        Ok(model)
    }

    async fn fetch_games(&self) -> SqlResult<Vec<GameEntity>> {
        Games::find()
            .order_by_asc(games::Column::Id)
            .all(&self.db)
            .await
            .map_err(|source| SqlDaoError::ListGames { source })
    }

    async fn apply_changes(&self, id: i32, changes: GameChanges) -> SqlResult<GameEntity> {
        if changes.is_empty() {
            return Games::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(|source| SqlDaoError::LoadGame { id, source })?
                .ok_or(SqlDaoError::GameNotFound { id });
        }

        let txn = self.db.begin().await.map_err(|source| SqlDaoError::Transaction {
            action: "begin",
            source,
        })?;

        // Write before reading back, same lock order as inserts.
        let mut update = Games::update_many().filter(games::Column::Id.eq(id));
        if let Some(price) = changes.price {
            update = update.col_expr(games::Column::Price, Expr::value(Some(price)));
        }
        if let Some(stock) = changes.stock {
            update = update.col_expr(games::Column::Stock, Expr::value(Some(stock)));
        }
        let result = update
            .exec(&txn)
            .await
            .map_err(|source| SqlDaoError::UpdateGame { id, source })?;
        if result.rows_affected == 0 {
            return Err(SqlDaoError::GameNotFound { id });
        }

        let updated = Games::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|source| SqlDaoError::LoadGame { id, source })?
            .ok_or(SqlDaoError::GameNotFound { id })?;

        txn.commit().await.map_err(|source| SqlDaoError::Transaction {
            action: "commit",
            source,
        })?;

        debug!(id, "game updated");
        Ok(updated)
    }

    async fn remove_game(&self, id: i32) -> SqlResult<()> {
        let txn = self.db.begin().await.map_err(|source| SqlDaoError::Transaction {
            action: "begin",
            source,
        })?;

        let result = Games::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|source| SqlDaoError::DeleteGame { id, source })?;
        if result.rows_affected == 0 {
            return Err(SqlDaoError::GameNotFound { id });
        }

        txn.commit().await.map_err(|source| SqlDaoError::Transaction {
            action: "commit",
            source,
        })?;

        debug!(id, "game deleted");
        Ok(())
    }

    async fn ping(&self) -> SqlResult<()> {
        self.db
            .ping()
            .await
            .map_err(|source| SqlDaoError::HealthPing { source })
    }

    async fn shutdown(&self) -> SqlResult<()> {
        self.db
            .clone()
            .close()
            .await
            .map_err(|source| SqlDaoError::Close { source })
    }
}

/// A unique index violation is the only way a duplicate surfaces.
fn insert_error(game: &NewGame, source: DbErr) -> SqlDaoError {
    match source.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => SqlDaoError::DuplicateGame {
            name: game.name.clone(),
            platform: game.platform.clone(),
        },
        _ => SqlDaoError::InsertGame {
            name: game.name.clone(),
            platform: game.platform.clone(),
            source,
        },
    }
}

impl GameStore for SqlGameStore {
    fn add_game(&self, game: NewGame) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let store = self.clone();
        Box::pin(async move { store.insert_game(game).await.map_err(Into::into) })
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.fetch_games().await.map_err(Into::into) })
    }

    fn update_game(
        &self,
        id: i32,
        changes: GameChanges,
    ) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let store = self.clone();
        Box::pin(async move { store.apply_changes(id, changes).await.map_err(Into::into) })
    }

    fn delete_game(&self, id: i32) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.remove_game(id).await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.ping().await.map_err(Into::into) })
    }

    fn close(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.shutdown().await.map_err(Into::into) })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::dao::storage::StorageError;

    async fn memory_store() -> SqlGameStore {
        SqlGameStore::connect(SqlConfig::in_memory())
            .await
            .expect("in-memory store")
    }

    fn chrono_trigger() -> NewGame {
        NewGame {
            name: "Chrono Trigger".into(),
            platform: "SNES".into(),
            release_date: NaiveDate::from_ymd_opt(1995, 3, 11).unwrap(),
            developer: "Square".into(),
            price: None,
            stock: None,
        }
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let store = memory_store().await;
        let games = store.list_games().await.unwrap();
        assert!(games.is_empty());
    }

    #[tokio::test]
    async fn added_game_is_listed_with_identical_fields() {
        let store = memory_store().await;
        let input = NewGame {
            price: Some(Decimal::new(1950, 2)),
            stock: Some(3),
            ..chrono_trigger()
        };

        let created = store.add_game(input.clone()).await.unwrap();
        assert!(created.id > 0);

        let games = store.list_games().await.unwrap();
        assert_eq!(games.len(), 1);
        let game = &games[0];
        assert_eq!(game.id, created.id);
        assert_eq!(game.name, input.name);
        assert_eq!(game.platform, input.platform);
        assert_eq!(game.release_date, input.release_date);
        assert_eq!(game.developer, input.developer);
        assert_eq!(game.price, Some(Decimal::new(195, 1)));
        assert_eq!(game.stock, Some(3));
    }

    #[tokio::test]
    async fn same_name_and_platform_is_rejected_once() {
        let store = memory_store().await;

        let first = store.add_game(chrono_trigger()).await;
        let second = store.add_game(chrono_trigger()).await;

        assert!(first.is_ok());
        match second {
            Err(StorageError::Duplicate { name, platform }) => {
                assert_eq!(name, "Chrono Trigger");
                assert_eq!(platform, "SNES");
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
        assert_eq!(store.list_games().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn same_name_on_another_platform_is_accepted() {
        let store = memory_store().await;
        store.add_game(chrono_trigger()).await.unwrap();

        let port = NewGame {
            platform: "PlayStation".into(),
            ..chrono_trigger()
        };
        store.add_game(port).await.unwrap();

        assert_eq!(store.list_games().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unique_index_backs_the_duplicate_check() {
        let store = memory_store().await;
        let game = chrono_trigger();
        store.add_game(game.clone()).await.unwrap();

        let err = games::ActiveModel {
            id: NotSet,
            name: Set(game.name.clone()),
            platform: Set(game.platform.clone()),
            release_date: Set(game.release_date),
            developer: Set("Someone else".into()),
            price: Set(None),
            stock: Set(None),
        }
        .insert(&store.db)
        .await
        .unwrap_err();

        assert!(matches!(
            insert_error(&game, err),
            SqlDaoError::DuplicateGame { .. }
        ));
    }

    #[tokio::test]
    async fn update_touches_only_supplied_fields() {
        let store = memory_store().await;
        let created = store
            .add_game(NewGame {
                price: Some(Decimal::new(30, 0)),
                stock: Some(7),
                ..chrono_trigger()
            })
            .await
            .unwrap();

        let updated = store
            .update_game(
                created.id,
                GameChanges {
                    price: None,
                    stock: Some(2),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.stock, Some(2));
        assert_eq!(updated.price, Some(Decimal::new(30, 0)));
        assert_eq!(updated.name, created.name);
        assert_eq!(store.list_games().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn empty_update_returns_current_row() {
        let store = memory_store().await;
        let created = store.add_game(chrono_trigger()).await.unwrap();

        let unchanged = store
            .update_game(created.id, GameChanges::default())
            .await
            .unwrap();

        assert_eq!(unchanged, created);
    }

    #[tokio::test]
    async fn update_of_missing_id_leaves_store_unchanged() {
        let store = memory_store().await;
        let created = store.add_game(chrono_trigger()).await.unwrap();

        let result = store
            .update_game(
                created.id + 1,
                GameChanges {
                    price: Some(Decimal::new(10, 0)),
                    stock: None,
                },
            )
            .await;

        assert!(matches!(result, Err(StorageError::NotFound { id }) if id == created.id + 1));
        assert_eq!(store.list_games().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_row() {
        let store = memory_store().await;
        let kept = store.add_game(chrono_trigger()).await.unwrap();
        let removed = store
            .add_game(NewGame {
                name: "Secret of Mana".into(),
                ..chrono_trigger()
            })
            .await
            .unwrap();

        store.delete_game(removed.id).await.unwrap();

        assert_eq!(store.list_games().await.unwrap(), vec![kept]);
    }

    #[tokio::test]
    async fn delete_of_missing_id_is_not_found() {
        let store = memory_store().await;

        let result = store.delete_game(42).await;

        assert!(matches!(result, Err(StorageError::NotFound { id: 42 })));
    }

    async fn file_store(dir: &tempfile::TempDir) -> SqlGameStore {
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("catalog.db").display()
        );
        SqlGameStore::connect(SqlConfig::new(url))
            .await
            .expect("file-backed store")
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_identical_adds_yield_one_success() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(&dir).await;

        for round in 0..10 {
            let game = NewGame {
                name: format!("Chrono Trigger {round}"),
                ..chrono_trigger()
            };
            let attempts = (0..4).map(|_| {
                let store = store.clone();
                let game = game.clone();
                tokio::spawn(async move { store.add_game(game).await })
            });

            let mut created = 0;
            let mut duplicates = 0;
            for outcome in futures::future::join_all(attempts).await {
                match outcome.unwrap() {
                    Ok(_) => created += 1,
                    Err(StorageError::Duplicate { .. }) => duplicates += 1,
                    Err(other) => panic!("unexpected storage failure: {other:?}"),
                }
            }
            assert_eq!((created, duplicates), (1, 3), "round {round}");
        }

        assert_eq!(store.list_games().await.unwrap().len(), 10);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_distinct_adds_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(&dir).await;

        let adds = (0..40).map(|n| {
            let store = store.clone();
            let game = NewGame {
                name: format!("Chrono Trigger {n}"),
                ..chrono_trigger()
            };
            tokio::spawn(async move { store.add_game(game).await })
        });
        for outcome in futures::future::join_all(adds).await {
            outcome.unwrap().unwrap();
        }

        assert_eq!(store.list_games().await.unwrap().len(), 40);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_updates_of_one_game_all_apply() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(&dir).await;
        let created = store.add_game(chrono_trigger()).await.unwrap();

        let updates = (1..=8).map(|stock| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .update_game(
                        created.id,
                        GameChanges {
                            price: None,
                            stock: Some(stock),
                        },
                    )
                    .await
            })
        });
        for outcome in futures::future::join_all(updates).await {
            let updated = outcome.unwrap().unwrap();
            assert_eq!(updated.id, created.id);
        }

        let games = store.list_games().await.unwrap();
        assert_eq!(games.len(), 1);
        assert!(matches!(games[0].stock, Some(1..=8)));
    }

    #[tokio::test]
    async fn health_check_pings_the_pool() {
        let store = memory_store().await;
        store.health_check().await.unwrap();
    }
}
