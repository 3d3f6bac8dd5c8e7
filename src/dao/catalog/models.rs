use serde::Deserialize;

/// One page of the `/games` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    /// Total number of matches across all pages.
    #[serde(default)]
    pub count: u64,
    /// URL of the following page, absent on the last one.
    #[serde(default)]
    pub next: Option<String>,
    /// Entries of this page.
    #[serde(default)]
    pub results: Vec<CatalogGame>,
}

/// Game entry as described by the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogGame {
    /// Display title.
    pub name: String,
    /// Release date as `YYYY-MM-DD`; unreleased titles have none.
    #[serde(default)]
    pub released: Option<String>,
    /// Platforms the game shipped on.
    #[serde(default)]
    pub platforms: Option<Vec<CatalogPlatform>>,
    /// Credited developers; only present on detailed payloads.
    #[serde(default)]
    pub developers: Option<Vec<NamedRef>>,
}

/// Platform wrapper used by the catalog (`{"platform": {"name": ..}}`).
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPlatform {
    /// Referenced platform.
    pub platform: NamedRef,
}

/// Any catalog object of which only the name matters.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    /// Display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_listing_with_missing_optional_fields() {
        let payload = r#"{
            "count": 2,
            "next": null,
            "results": [
                {
                    "name": "Chrono Trigger",
                    "released": "1995-03-11",
                    "platforms": [
                        {"platform": {"id": 79, "name": "SNES"}},
                        {"platform": {"id": 15, "name": "PlayStation"}}
                    ],
                    "developers": [{"name": "Square"}]
                },
                {"name": "Untitled Project", "released": null, "platforms": null}
            ]
        }"#;

        let page: CatalogPage = serde_json::from_str(payload).unwrap();

        assert_eq!(page.count, 2);
        assert!(page.next.is_none());
        assert_eq!(page.results.len(), 2);
        let first = &page.results[0];
        assert_eq!(first.released.as_deref(), Some("1995-03-11"));
        assert_eq!(first.platforms.as_ref().map(Vec::len), Some(2));
        assert_eq!(first.developers.as_ref().unwrap()[0].name, "Square");
        assert!(page.results[1].platforms.is_none());
        assert!(page.results[1].developers.is_none());
    }
}
