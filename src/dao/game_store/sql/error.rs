use std::path::PathBuf;

use sea_orm::DbErr;
use thiserror::Error;

/// Result alias for the SQL store.
pub type SqlResult<T> = std::result::Result<T, SqlDaoError>;

/// Failures raised by the sea-orm store before they are folded into storage errors.
#[derive(Debug, Error)]
pub enum SqlDaoError {
    /// The SQLite parent directory could not be created.
    #[error("failed to create database directory `{}`", path.display())]
    CreateDirectory {
        /// Directory that was requested.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Every connection attempt failed.
    #[error("failed to connect to `{url}` after {attempts} attempt(s)")]
    Connect {
        /// Connection URL.
        url: String,
        /// Attempts made before giving up.
        attempts: u32,
        /// Underlying error.
        #[source]
        source: DbErr,
    },
    /// Migrations did not apply.
    #[error("failed to apply schema migrations")]
    Migrate {
        /// Underlying error.
        #[source]
        source: DbErr,
    },
    /// Health ping failed.
    #[error("database ping health check failed")]
    HealthPing {
        /// Underlying error.
        #[source]
        source: DbErr,
    },
    /// Opening or committing a transaction failed.
    #[error("failed to {action} transaction")]
    Transaction {
        /// `begin` or `commit`.
        action: &'static str,
        /// Underlying error.
        #[source]
        source: DbErr,
    },
    /// The unique `(name, platform)` index rejected the row.
    #[error("game `{name}` already exists for platform `{platform}`")]
    DuplicateGame {
        /// Rejected title.
        name: String,
        /// Platform it clashed on.
        platform: String,
    },
    /// INSERT failed for another reason.
    #[error("failed to insert game `{name}` for platform `{platform}`")]
    InsertGame {
        /// Title being inserted.
        name: String,
        /// Platform being inserted.
        platform: String,
        /// Underlying error.
        #[source]
        source: DbErr,
    },
    /// Listing query failed.
    #[error("failed to list games")]
    ListGames {
        /// Underlying error.
        #[source]
        source: DbErr,
    },
    /// Reading one row failed.
    #[error("failed to load game `{id}`")]
    LoadGame {
        /// Targeted identifier.
        id: i32,
        /// Underlying error.
        #[source]
        source: DbErr,
    },
    /// UPDATE failed.
    #[error("failed to update game `{id}`")]
    UpdateGame {
        /// Targeted identifier.
        id: i32,
        /// Underlying error.
        #[source]
        source: DbErr,
    },
    /// DELETE failed.
    #[error("failed to delete game `{id}`")]
    DeleteGame {
        /// Targeted identifier.
        id: i32,
        /// Underlying error.
        #[source]
        source: DbErr,
    },
    /// No row has this id.
    #[error("game `{id}` not found")]
    GameNotFound {
        /// Requested identifier.
        id: i32,
    },
    /// Closing the pool failed.
    #[error("failed to close database connection")]
    Close {
        /// Underlying error.
        #[source]
        source: DbErr,
    },
}
