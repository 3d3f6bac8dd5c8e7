/// Third-party catalog API client used by the batch import.
#[cfg(feature = "catalog-import")]
pub mod catalog;
/// sea-orm entity definitions.
pub mod entity;
/// Game persistence and retrieval operations.
pub mod game_store;
/// Storage-facing model definitions.
pub mod models;
/// Storage abstraction layer for database operations.
pub mod storage;
