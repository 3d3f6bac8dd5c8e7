//! Application-level configuration loading: JSON file first, environment overrides second.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

#[cfg(feature = "catalog-import")]
use crate::dao::catalog::CatalogConfig;
use crate::dao::game_store::sql::SqlConfig;

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "GAME_CATALOG_CONFIG_PATH";
/// SQLite file used when nothing else is configured.
const DEFAULT_DATABASE_URL: &str = "sqlite://database/database.db?mode=rwc";
/// Port used when neither the file nor the environment sets one.
const DEFAULT_PORT: u16 = 8080;
#[cfg(feature = "catalog-import")]
const DEFAULT_CATALOG_URL: &str = crate::dao::catalog::DEFAULT_CATALOG_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// sea-orm connection URL of the catalog database.
    pub database_url: String,
    /// TCP port the HTTP server binds to.
    pub port: u16,
    /// Shared secret expected in `X-Admin-Token`; admin routes are closed when unset.
    pub admin_token: Option<String>,
    /// Root URL of the third-party catalog API.
    pub catalog_url: String,
    /// Key for the third-party catalog API.
    pub catalog_api_key: Option<String>,
}

impl AppConfig {
    /// Load the configuration file (falling back to built-in defaults) and apply
    /// environment overrides on top.
    pub fn load() -> Self {
        let mut config = Self::from_file();
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    fn from_file() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    info!(path = %path.display(), "loaded configuration file");
                    raw.into()
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Apply environment-style overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }

        let port = lookup("PORT").or_else(|| lookup("SERVER_PORT"));
        if let Some(raw) = port {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(err) => warn!(value = %raw, error = %err, "ignoring invalid port override"),
            }
        }

        if let Some(token) = lookup("ADMIN_TOKEN") {
            self.admin_token = Some(token);
        }
        if let Some(url) = lookup("CATALOG_API_URL") {
            self.catalog_url = url;
        }
        if let Some(key) = lookup("CATALOG_API_KEY") {
            self.catalog_api_key = Some(key);
        }
    }

    /// Connection settings for the catalog database.
    pub fn sql_config(&self) -> SqlConfig {
        SqlConfig::new(self.database_url.clone())
    }

    /// Connection settings for the third-party catalog API.
    #[cfg(feature = "catalog-import")]
    pub fn catalog_config(&self) -> CatalogConfig {
        let config = CatalogConfig::new(self.catalog_url.clone());
        match &self.catalog_api_key {
            Some(key) => config.with_api_key(key.clone()),
            None => config,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            port: DEFAULT_PORT,
            admin_token: None,
            #[cfg(feature = "catalog-import")]
            catalog_url: DEFAULT_CATALOG_URL.into(),
            #[cfg(not(feature = "catalog-import"))]
            catalog_url: String::new(),
            catalog_api_key: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    database_url: Option<String>,
    port: Option<u16>,
    admin_token: Option<String>,
    catalog: Option<RawCatalog>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
/// `catalog` section of the configuration file.
struct RawCatalog {
    base_url: Option<String>,
    api_key: Option<String>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        let catalog = value.catalog.unwrap_or_default();
        Self {
            database_url: value.database_url.unwrap_or(defaults.database_url),
            port: value.port.unwrap_or(defaults.port),
            admin_token: value.admin_token,
            catalog_url: catalog.base_url.unwrap_or(defaults.catalog_url),
            catalog_api_key: catalog.api_key,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let raw: RawConfig = serde_json::from_str(
            r#"{"port": 9000, "catalog": {"api_key": "secret"}}"#,
        )
        .unwrap();
        let config = AppConfig::from(raw);

        assert_eq!(config.port, 9000);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.catalog_api_key.as_deref(), Some("secret"));
        assert_eq!(config.catalog_url, AppConfig::default().catalog_url);
        assert_eq!(config.admin_token, None);
    }

    #[test]
    fn environment_overrides_file_values() {
        let env = HashMap::from([
            ("DATABASE_URL", "sqlite::memory:"),
            ("SERVER_PORT", "3000"),
            ("ADMIN_TOKEN", "letmein"),
            ("CATALOG_API_KEY", "   "),
        ]);
        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(|value| value.to_string()));

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.port, 3000);
        assert_eq!(config.admin_token.as_deref(), Some("letmein"));
        assert_eq!(config.catalog_api_key, None);
    }

    #[test]
    fn invalid_port_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| (key == "PORT").then(|| "eighty".to_string()));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
