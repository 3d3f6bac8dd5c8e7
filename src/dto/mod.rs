//! Request and response payloads of the HTTP API.

/// Game catalog payloads.
pub mod game;
/// Health check payload.
pub mod health;
#[cfg(feature = "catalog-import")]
/// Catalog import payloads.
pub mod import;
/// Custom field validators.
pub mod validation;
