//! Relational [`GameStore`](super::GameStore) on top of sea-orm.

mod config;
mod connection;
mod error;
/// Store implementation and its transactions.
pub mod store;

pub use config::SqlConfig;
pub use error::SqlDaoError;
pub use store::SqlGameStore;

use crate::dao::storage::StorageError;

impl From<SqlDaoError> for StorageError {
    fn from(err: SqlDaoError) -> Self {
        match err {
            SqlDaoError::DuplicateGame { name, platform } => {
                StorageError::Duplicate { name, platform }
            }
            SqlDaoError::GameNotFound { id } => StorageError::NotFound { id },
            other => StorageError::backend(other.to_string(), other),
        }
    }
}
