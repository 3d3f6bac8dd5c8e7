//! Client for the RAWG-compatible third-party game catalog.

mod client;
mod config;
mod error;
mod models;

pub use client::CatalogClient;
pub use config::{CatalogConfig, DEFAULT_CATALOG_URL};
pub use error::{CatalogError, CatalogResult};
pub use models::{CatalogGame, CatalogPage, CatalogPlatform, NamedRef};
