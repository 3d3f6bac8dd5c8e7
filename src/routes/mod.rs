use axum::{Router, response::Redirect, routing::get};

use crate::state::SharedState;

/// Admin-token middleware and admin-only routes.
pub mod admin;
/// Swagger UI and OpenAPI document.
pub mod docs;
/// Catalog CRUD routes.
pub mod game;
/// Health check route.
pub mod health;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(game::router(state.clone()))
        .merge(admin::router(state.clone()))
        .route("/", get(|| async { Redirect::permanent("/docs") }));

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
