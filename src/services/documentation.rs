use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the game catalog.
#[openapi(
    info(title = "Game Collection API", version = "1.0.0"),
    paths(
        crate::routes::health::healthcheck,
        crate::routes::game::add_game,
        crate::routes::game::list_games,
        crate::routes::game::update_game,
        crate::routes::game::delete_game,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::game::CreateGameRequest,
            crate::dto::game::UpdateGameRequest,
            crate::dto::game::GameView,
            crate::dto::game::GameListResponse,
            crate::dto::game::GameDeleteResponse,
            crate::error::ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "game", description = "Add, view, update, and delete games from the collection"),
    )
)]
pub struct ApiDoc;

#[cfg(feature = "catalog-import")]
#[derive(OpenApi)]
/// Admin import endpoints, only compiled with the `catalog-import` feature.
#[openapi(
    paths(crate::routes::admin::import_games),
    components(schemas(
        crate::dto::import::ImportRequest,
        crate::dto::import::ImportSummary,
    )),
    tags((name = "admin", description = "Batch import from the third-party catalog"))
)]
pub struct ImportApiDoc;

/// Full OpenAPI document for the enabled feature set.
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[allow(unused_mut)]
    let mut doc = ApiDoc::openapi();
    #[cfg(feature = "catalog-import")]
    doc.merge(ImportApiDoc::openapi());
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_game_route() {
        let doc = openapi();
        for path in ["/healthcheck", "/game", "/games", "/game/{game_id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        #[cfg(feature = "catalog-import")]
        assert!(doc.paths.paths.contains_key("/admin/import"));
    }
}
