use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A game with the same `(name, platform)` pair is already stored.
    #[error("a game named `{name}` already exists for platform `{platform}`")]
    Duplicate {
        /// Rejected title.
        name: String,
        /// Platform it clashed on.
        platform: String,
    },
    /// No game is stored under the requested id.
    #[error("game `{id}` not found")]
    NotFound {
        /// Requested identifier.
        id: i32,
    },
    /// Any other persistence failure.
    #[error("storage backend failure: {message}")]
    Backend {
        /// What the backend was doing.
        message: String,
        /// Underlying driver error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct a backend error from any underlying failure.
    pub fn backend(message: impl Into<String>, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Backend {
            message: message.into(),
            source: Box::new(source),
        }
    }
}
