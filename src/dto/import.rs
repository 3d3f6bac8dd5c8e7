//! DTO definitions for the catalog batch import.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::game::GameView;

const DEFAULT_PAGES: u32 = 1;
const DEFAULT_PAGE_SIZE: u32 = 20;

/// Controls how much of the third-party catalog is pulled in one import.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct ImportRequest {
    /// Number of catalog pages to walk, starting at the first one.
    #[serde(default = "default_pages")]
    #[schema(minimum = 1, maximum = 10, example = 1)]
    #[validate(range(min = 1, max = 10))]
    pub pages: u32,
    /// Entries requested per page.
    #[serde(default = "default_page_size")]
    #[schema(minimum = 1, maximum = 40, example = 20)]
    #[validate(range(min = 1, max = 40))]
    pub page_size: u32,
    /// Optional free-text filter forwarded to the catalog.
    #[serde(default)]
    pub search: Option<String>,
}

impl Default for ImportRequest {
    fn default() -> Self {
        Self {
            pages: DEFAULT_PAGES,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
        }
    }
}

fn default_pages() -> u32 {
    DEFAULT_PAGES
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Outcome of a batch import.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct ImportSummary {
    /// Catalog entries received.
    pub fetched: usize,
    /// Rows inserted (one per game and platform).
    pub imported: usize,
    /// Rows skipped because the `(name, platform)` pair was already stored.
    pub skipped_duplicates: usize,
    /// Catalog entries without a usable release date or platform.
    pub skipped_incomplete: usize,
    /// Games created by this import.
    pub games: Vec<GameView>,
}
