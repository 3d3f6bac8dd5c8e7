//! Library crate for the game catalog API, exposing modules for binaries and integration tests.

/// Runtime configuration.
pub mod config;
/// Persistence and third-party data access.
pub mod dao;
/// HTTP payloads.
pub mod dto;
/// Error types and their HTTP mapping.
pub mod error;
/// axum routers.
pub mod routes;
/// Business operations behind the routes.
pub mod services;
/// Shared application state.
pub mod state;
