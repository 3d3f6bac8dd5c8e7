//! Game catalog binary entrypoint wiring configuration, the SQL store, and the REST layer.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use game_catalog_api::{
    config::AppConfig,
    dao::game_store::{GameStore, sql::SqlGameStore},
    routes,
    state::{AppState, SharedState},
};
#[cfg(feature = "catalog-import")]
use game_catalog_api::dao::catalog::CatalogClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    if config.admin_token.is_none() {
        warn!("no admin token configured; admin routes will reject every request");
    }

    let store = SqlGameStore::connect(config.sql_config())
        .await
        .context("opening the game database")?;
    let store: Arc<dyn GameStore> = Arc::new(store);

    #[cfg(feature = "catalog-import")]
    let catalog =
        CatalogClient::new(config.catalog_config()).context("building the catalog client")?;

    let app_state = AppState::new(
        Arc::clone(&store),
        config.admin_token.clone(),
        #[cfg(feature = "catalog-import")]
        catalog,
    );
    let app = build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    let service = app.into_make_service();
    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    if let Err(err) = store.close().await {
        error!(error = %err, "failed to close the game database");
    }
    info!("server stopped");

    Ok(())
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = term.recv() => {},
                }
            }
            Err(err) => {
                warn!(error = %err, "cannot listen for SIGTERM; waiting for Ctrl+C only");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
