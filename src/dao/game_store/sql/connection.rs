use std::{fs, time::Duration};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::time::sleep;
use tracing::warn;

use super::{
    config::SqlConfig,
    error::{SqlDaoError, SqlResult},
};

struct RetryPolicy;

impl RetryPolicy {
    const MAX_ATTEMPTS: u32 = 5;
    const INITIAL_DELAY_MS: u64 = 250;

    fn initial_delay() -> Duration {
        Duration::from_millis(Self::INITIAL_DELAY_MS)
    }

    fn next_delay(current: Duration) -> Duration {
        (current * 2).min(Duration::from_secs(5))
    }
}

/// Open the connection pool, creating the SQLite directory when needed.
pub async fn establish_connection(config: &SqlConfig) -> SqlResult<DatabaseConnection> {
    if let Some(parent) = config
        .sqlite_file()
        .as_deref()
        .and_then(|path| path.parent())
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent).map_err(|source| SqlDaoError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(false);

    let mut attempts = 0;
    let mut delay = RetryPolicy::initial_delay();

    loop {
        attempts += 1;
        let outcome = match Database::connect(options.clone()).await {
            Ok(db) => db.ping().await.map(|()| db),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(db) => return Ok(db),
            Err(source) if attempts >= RetryPolicy::MAX_ATTEMPTS => {
                return Err(SqlDaoError::Connect {
                    url: config.url.clone(),
                    attempts,
                    source,
                });
            }
            Err(err) => {
                warn!(attempts, error = %err, "database connection attempt failed; retrying");
                sleep(delay).await;
                delay = RetryPolicy::next_delay(delay);
            }
        }
    }
}
