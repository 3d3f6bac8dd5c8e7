use std::{sync::Arc, time::Duration};

use reqwest::Client;
use tracing::debug;

use super::{
    config::CatalogConfig,
    error::{CatalogError, CatalogResult},
    models::CatalogPage,
};

const GAMES_PATH: &str = "games";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Thin HTTP client for the catalog `/games` listing.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Arc<str>,
    api_key: Option<Arc<str>>,
}

impl CatalogClient {
    /// Build a client for the configured catalog.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| CatalogError::ClientBuilder { source })?;

        Ok(Self {
            client,
            base_url: Arc::<str>::from(config.base_url.trim_end_matches('/')),
            api_key: config.api_key.map(Arc::<str>::from),
        })
    }

    /// Fetch one page of games, optionally filtered by a search term.
    pub async fn fetch_games(
        &self,
        page: u32,
        page_size: u32,
        search: Option<&str>,
    ) -> CatalogResult<CatalogPage> {
        let api_key = self.api_key.as_deref().ok_or(CatalogError::MissingApiKey)?;
        let url = format!("{}/{}", self.base_url, GAMES_PATH);

        let mut query = vec![
            ("key", api_key.to_string()),
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];
        if let Some(term) = search.filter(|term| !term.trim().is_empty()) {
            query.push(("search", term.trim().to_string()));
        }

        debug!(page, page_size, search = ?search, "querying game catalog");
        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|source| CatalogError::RequestSend {
                path: GAMES_PATH.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(CatalogError::RequestStatus {
                path: GAMES_PATH.to_string(),
                status: response.status(),
            });
        }

        response
            .json::<CatalogPage>()
            .await
            .map_err(|source| CatalogError::DecodeResponse {
                path: GAMES_PATH.to_string(),
                source,
            })
    }
}
