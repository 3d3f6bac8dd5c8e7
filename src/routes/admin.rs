use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
#[cfg(feature = "catalog-import")]
use axum::{Json, middleware, routing::post};

use crate::{error::AppError, state::SharedState};
#[cfg(feature = "catalog-import")]
use crate::{
    dto::import::{ImportRequest, ImportSummary},
    error::ErrorBody,
    services::import_service,
};
#[cfg(feature = "catalog-import")]
use validator::Validate;

const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Admin-only endpoints.
#[cfg(feature = "catalog-import")]
pub fn router(state: SharedState) -> axum::Router<SharedState> {
    axum::Router::new()
        .route("/admin/import", post(import_games))
        .route_layer(middleware::from_fn_with_state(state, require_admin_token))
}

/// Admin-only endpoints; empty without the `catalog-import` feature.
#[cfg(not(feature = "catalog-import"))]
pub fn router(_state: SharedState) -> axum::Router<SharedState> {
    axum::Router::new()
}

/// Import games from the third-party catalog.
#[cfg(feature = "catalog-import")]
#[utoipa::path(
    post,
    path = "/admin/import",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Configured admin token")),
    request_body = ImportRequest,
    responses(
        (status = 200, description = "Import finished", body = ImportSummary),
        (status = 400, description = "Invalid paging", body = ErrorBody),
        (status = 401, description = "Missing or invalid admin token", body = ErrorBody),
        (status = 503, description = "Catalog unreachable or not configured", body = ErrorBody)
    )
)]
pub async fn import_games(
    State(state): State<SharedState>,
    Json(payload): Json<ImportRequest>,
) -> Result<Json<ImportSummary>, AppError> {
    payload.validate()?;
    Ok(Json(import_service::import_games(&state, payload).await?))
}

/// Reject the request unless `X-Admin-Token` matches the configured token.
pub async fn require_admin_token(
    State(state): State<SharedState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            AppError::Unauthorized("missing admin token header `X-Admin-Token`".into())
        })?;

    match state.admin_token() {
        Some(token) if token == provided => Ok(next.run(req).await),
        Some(_) => Err(AppError::Unauthorized("invalid admin token".into())),
        None => Err(AppError::Unauthorized(
            "admin token is not configured on this server".into(),
        )),
    }
}
