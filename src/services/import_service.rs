//! Batch import of games from the third-party catalog.
//!
//! Every catalog entry is expanded into one row per platform and inserted through
//! the regular store path, one transaction per row. Duplicates are counted and
//! skipped; any other storage failure aborts the import, keeping the rows that
//! were already committed.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::{
    dao::{catalog::CatalogGame, models::NewGame, storage::StorageError},
    dto::import::{ImportRequest, ImportSummary},
    error::ServiceError,
    state::SharedState,
};

/// Developer recorded when the catalog does not credit anyone.
pub const UNKNOWN_DEVELOPER: &str = "Unknown";
const CATALOG_DATE_FORMAT: &str = "%Y-%m-%d";

/// Pull `request.pages` pages from the catalog and store every new game.
pub async fn import_games(
    state: &SharedState,
    request: ImportRequest,
) -> Result<ImportSummary, ServiceError> {
    let store = state.game_store();
    let mut summary = ImportSummary::default();

    for page in 1..=request.pages {
        let listing = state
            .catalog()
            .fetch_games(page, request.page_size, request.search.as_deref())
            .await?;
        let last_page = listing.next.is_none();
        summary.fetched += listing.results.len();

        for entry in listing.results {
            let games = expand_catalog_game(entry);
            if games.is_empty() {
                summary.skipped_incomplete += 1;
                continue;
            }

            for game in games {
                match store.add_game(game).await {
                    Ok(created) => {
                        summary.imported += 1;
                        summary.games.push(created.into());
                    }
                    Err(StorageError::Duplicate { name, platform }) => {
                        debug!(%name, %platform, "catalog game already stored; skipping");
                        summary.skipped_duplicates += 1;
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }

        if last_page {
            break;
        }
    }

    info!(
        fetched = summary.fetched,
        imported = summary.imported,
        skipped_duplicates = summary.skipped_duplicates,
        skipped_incomplete = summary.skipped_incomplete,
        "catalog import finished"
    );
    Ok(summary)
}

/// Turn one catalog entry into one storable game per distinct platform.
///
/// Entries without a name, a parseable release date, or any platform yield nothing.
pub fn expand_catalog_game(game: CatalogGame) -> Vec<NewGame> {
    let name = game.name.trim();
    if name.is_empty() {
        return Vec::new();
    }

    let Some(release_date) = game
        .released
        .as_deref()
        .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), CATALOG_DATE_FORMAT).ok())
    else {
        return Vec::new();
    };

    let developer = game
        .developers
        .unwrap_or_default()
        .into_iter()
        .map(|developer| developer.name.trim().to_owned())
        .find(|developer| !developer.is_empty())
        .unwrap_or_else(|| UNKNOWN_DEVELOPER.to_owned());

    let mut platforms: Vec<String> = Vec::new();
    for entry in game.platforms.unwrap_or_default() {
        let platform = entry.platform.name.trim();
        if !platform.is_empty() && !platforms.iter().any(|known| known == platform) {
            platforms.push(platform.to_owned());
        }
    }

    platforms
        .into_iter()
        .map(|platform| NewGame {
            name: name.to_owned(),
            platform,
            release_date,
            developer: developer.clone(),
            price: None,
            stock: None,
        })
        .collect()
}
