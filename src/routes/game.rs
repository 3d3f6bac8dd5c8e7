use axum::{
    Json, Router,
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, patch, post},
};
use validator::Validate;

use crate::{
    dto::game::{
        CreateGameRequest, GameDeleteQuery, GameDeleteResponse, GameListResponse, GameView,
        UpdateGameRequest,
    },
    error::{AppError, ErrorBody},
    routes::admin::require_admin_token,
    services::game_service,
    state::SharedState,
};

/// Catalog routes. Reads and additions are public, changes need the admin token.
pub fn router(state: SharedState) -> Router<SharedState> {
    let admin_only = middleware::from_fn_with_state(state, require_admin_token);

    Router::new()
        .route(
            "/game",
            post(add_game).merge(delete(delete_game).route_layer(admin_only.clone())),
        )
        .route(
            "/game/{game_id}",
            patch(update_game).route_layer(admin_only),
        )
        .route("/games", get(list_games))
}

/// Add a new game to the collection.
///
/// Returns a representation of the created game.
#[utoipa::path(
    post,
    path = "/game",
    tag = "game",
    request_body = CreateGameRequest,
    responses(
        (status = 200, description = "Game created", body = GameView),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 409, description = "Same name already stored for this platform", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody)
    )
)]
pub async fn add_game(
    State(state): State<SharedState>,
    Json(payload): Json<CreateGameRequest>,
) -> Result<Json<GameView>, AppError> {
    payload.validate()?;
    let view = game_service::add_game(&state, payload).await?;
    Ok(Json(view))
}

/// List every game registered in the collection.
#[utoipa::path(
    get,
    path = "/games",
    tag = "game",
    responses(
        (status = 200, description = "All games, possibly none", body = GameListResponse),
        (status = 500, description = "Database failure", body = ErrorBody)
    )
)]
pub async fn list_games(
    State(state): State<SharedState>,
) -> Result<Json<GameListResponse>, AppError> {
    Ok(Json(game_service::list_games(&state).await?))
}

/// Update the price and/or stock of a game.
#[utoipa::path(
    patch,
    path = "/game/{game_id}",
    tag = "game",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("game_id" = i32, Path, description = "Identifier of the game to update")
    ),
    request_body = UpdateGameRequest,
    responses(
        (status = 200, description = "Game updated", body = GameView),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 401, description = "Missing or invalid admin token", body = ErrorBody),
        (status = 404, description = "Unknown game", body = ErrorBody)
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    Path(game_id): Path<i32>,
    Json(payload): Json<UpdateGameRequest>,
) -> Result<Json<GameView>, AppError> {
    payload.validate()?;
    let view = game_service::update_game(&state, game_id, payload).await?;
    Ok(Json(view))
}

/// Remove a game from the collection, based on the provided game id.
#[utoipa::path(
    delete,
    path = "/game",
    tag = "game",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        GameDeleteQuery
    ),
    responses(
        (status = 200, description = "Game removed", body = GameDeleteResponse),
        (status = 401, description = "Missing or invalid admin token", body = ErrorBody),
        (status = 404, description = "Unknown game", body = ErrorBody)
    )
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    Query(query): Query<GameDeleteQuery>,
) -> Result<Json<GameDeleteResponse>, AppError> {
    let response = game_service::delete_game(&state, query.game_id).await?;
    Ok(Json(response))
}
