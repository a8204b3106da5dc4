use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::sync::RwLock;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::utils::redact::{redact_url, scrub};

#[derive(Clone)]
pub struct StoreOptions {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
    pub ping_on_acquire: bool,
}

impl StoreOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            url: config.database_url.clone(),
            max_connections: config.database_max_connections.max(1),
            connect_timeout: Duration::from_secs(config.database_connect_timeout_secs),
            ping_on_acquire: config.database_ping_on_acquire,
        }
    }
}

struct Slot {
    generation: u64,
    conn: DatabaseConnection,
}

/// Lazily opened, process-wide handle to the database.
///
/// Cloning is cheap and every clone shares the same cached pool. The first
/// `acquire` connects; later calls hand back the cached pool, pinging it first
/// when `ping_on_acquire` is set and reconnecting if the ping fails.
#[derive(Clone)]
pub struct Store {
    options: Arc<StoreOptions>,
    slot: Arc<RwLock<Option<Slot>>>,
}

impl Store {
    pub fn new(options: StoreOptions) -> Self {
        Self {
            options: Arc::new(options),
            slot: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn acquire(&self) -> AppResult<DatabaseConnection> {
        let seen = {
            let guard = self.slot.read().await;
            match guard.as_ref() {
                Some(slot) => {
                    if !self.options.ping_on_acquire {
                        return Ok(slot.conn.clone());
                    }
                    match slot.conn.ping().await {
                        Ok(()) => return Ok(slot.conn.clone()),
                        Err(e) => {
                            tracing::warn!(
                                generation = slot.generation,
                                error = %scrub(&e.to_string(), &self.options.url),
                                "Cached database connection failed ping"
                            );
                            Some(slot.generation)
                        }
                    }
                }
                None => None,
            }
        };

        let mut guard = self.slot.write().await;

        // Another task may have connected or reconnected while we waited.
        if let Some(slot) = guard.as_ref() {
            if Some(slot.generation) != seen {
                return Ok(slot.conn.clone());
            }
        }

        let conn = self.connect().await?;
        let generation = seen.map_or(0, |g| g + 1);
        if let Some(stale) = guard.take() {
            // Best effort; the pool is already unhealthy.
            let _ = stale.conn.close().await;
        }
        *guard = Some(Slot {
            generation,
            conn: conn.clone(),
        });

        Ok(conn)
    }

    /// Close the cached pool, if any. A later `acquire` connects afresh.
    pub async fn close(&self) -> AppResult<()> {
        if let Some(slot) = self.slot.write().await.take() {
            slot.conn
                .close()
                .await
                .map_err(|e| AppError::Connection(scrub(&e.to_string(), &self.options.url)))?;
            tracing::info!("Database connection closed");
        }
        Ok(())
    }

    async fn connect(&self) -> AppResult<DatabaseConnection> {
        tracing::info!(url = %redact_url(&self.options.url), "Connecting to database");

        let mut opts = ConnectOptions::new(self.options.url.clone());
        opts.max_connections(self.options.max_connections)
            .min_connections(1)
            .connect_timeout(self.options.connect_timeout)
            .acquire_timeout(self.options.connect_timeout)
            .sqlx_logging(false);

        Database::connect(opts).await.map_err(|e| {
            AppError::Connection(format!(
                "Failed to connect to database: {}",
                scrub(&e.to_string(), &self.options.url)
            ))
        })
    }
}
