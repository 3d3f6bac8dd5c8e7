/// OpenAPI documentation generation.
pub mod documentation;
/// Catalog CRUD operations.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Batch import from the third-party catalog.
#[cfg(feature = "catalog-import")]
pub mod import_service;
