/// Public RAWG endpoint used when nothing else is configured.
pub const DEFAULT_CATALOG_URL: &str = "https://api.rawg.io/api";

/// Runtime configuration describing how to reach the catalog API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Root of the API, without the trailing `/games`.
    pub base_url: String,
    /// Key appended to every request as `key=`.
    pub api_key: Option<String>,
}

impl CatalogConfig {
    /// Construct a configuration pointing at `base_url` without credentials.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Attach the API key sent with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}
