use std::{path::PathBuf, time::Duration};

const SQLITE_MEMORY: &str = ":memory:";

/// Runtime configuration describing how to open the relational database.
#[derive(Debug, Clone)]
pub struct SqlConfig {
    /// sea-orm connection URL (e.g. `sqlite://database/database.db?mode=rwc`).
    pub url: String,
    /// Upper bound of pooled connections.
    pub max_connections: u32,
    /// Connections kept open while idle.
    pub min_connections: u32,
    /// Time allowed to acquire a connection.
    pub connect_timeout: Duration,
}

impl SqlConfig {
    /// Configuration for a pooled connection to `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(8),
        }
    }

    /// Private in-memory SQLite database.
    ///
    /// Every SQLite connection gets its own memory database, so the pool is pinned
    /// to a single connection that lives as long as the store.
    pub fn in_memory() -> Self {
        Self {
            max_connections: 1,
            ..Self::new("sqlite::memory:")
        }
    }

    /// On-disk location of the SQLite database, if the URL points to a file.
    pub fn sqlite_file(&self) -> Option<PathBuf> {
        let rest = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))?;
        let path = rest.split('?').next().unwrap_or_default();
        if path.is_empty() || path == SQLITE_MEMORY {
            return None;
        }
        Some(PathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_file_strips_scheme_and_query() {
        let config = SqlConfig::new("sqlite://database/database.db?mode=rwc");
        assert_eq!(
            config.sqlite_file(),
            Some(PathBuf::from("database/database.db"))
        );

        let config = SqlConfig::new("sqlite:catalog.db");
        assert_eq!(config.sqlite_file(), Some(PathBuf::from("catalog.db")));
    }

    #[test]
    fn sqlite_file_ignores_memory_and_other_backends() {
        assert_eq!(SqlConfig::in_memory().sqlite_file(), None);
        assert_eq!(
            SqlConfig::new("postgres://localhost/catalog").sqlite_file(),
            None
        );
    }
}
