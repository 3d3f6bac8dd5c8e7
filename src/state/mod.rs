use std::sync::Arc;

#[cfg(feature = "catalog-import")]
use crate::dao::catalog::CatalogClient;
use crate::dao::game_store::GameStore;

/// Handle passed to every handler.
pub type SharedState = Arc<AppState>;

/// Central application state holding the storage handle and request-time settings.
///
/// Nothing in here is mutated after startup; handlers share it through an [`Arc`].
pub struct AppState {
    game_store: Arc<dyn GameStore>,
    admin_token: Option<String>,
    #[cfg(feature = "catalog-import")]
    catalog: CatalogClient,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(
        game_store: Arc<dyn GameStore>,
        admin_token: Option<String>,
        #[cfg(feature = "catalog-import")] catalog: CatalogClient,
    ) -> SharedState {
        Arc::new(Self {
            game_store,
            admin_token,
            #[cfg(feature = "catalog-import")]
            catalog,
        })
    }

    /// Handle to the game store.
    pub fn game_store(&self) -> Arc<dyn GameStore> {
        Arc::clone(&self.game_store)
    }

    /// Token that unlocks the admin routes, if one is configured.
    pub fn admin_token(&self) -> Option<&str> {
        self.admin_token.as_deref()
    }

    /// Client for the third-party catalog used by the batch import.
    #[cfg(feature = "catalog-import")]
    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }
}
