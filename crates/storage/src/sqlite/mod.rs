use std::sync::Arc;
use std::time::Duration;

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use thiserror::Error;

use crate::repository::{CacheStorage, Storage};

mod cache_repo;
mod mapping;
mod migrate;

/// Run on every new connection.
///
/// Foreign keys make dropping a region cascade to its entries. WAL lets a
/// `fetch` read the cache while an `install` in another process writes it;
/// the busy timeout covers the moment the writer commits.
const CONNECTION_PRAGMAS: [&str; 3] = [
    "PRAGMA foreign_keys = ON;",
    "PRAGMA journal_mode = WAL;",
    "PRAGMA busy_timeout = 5000;",
];

// One writer (install) plus a few concurrent lookups.
const MAX_CONNECTIONS: u32 = 4;

/// Asset cache regions persisted in a `SQLite` database.
#[derive(Clone)]
pub struct SqliteCacheRepository {
    pool: SqlitePool,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SqliteInitError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl SqliteCacheRepository {
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the database cannot be opened or a
    /// connection pragma fails.
    pub async fn connect(database_url: &str) -> Result<Self, SqliteInitError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(5))
            .after_connect(|conn, _meta| {
                Box::pin(async move {
                    for pragma in CONNECTION_PRAGMAS {
                        sqlx::query(pragma).execute(&mut *conn).await?;
                    }
                    Ok(())
                })
            })
            .connect(database_url)
            .await?;
        tracing::debug!(url = database_url, "opened cache database");
        Ok(Self { pool })
    }

    /// Connect and bring the schema up to date.
    ///
    /// # Errors
    ///
    /// Same as [`SqliteCacheRepository::connect`], plus migration failures.
    pub async fn open(database_url: &str) -> Result<Self, SqliteInitError> {
        let repo = Self::connect(database_url).await?;
        repo.migrate().await?;
        Ok(repo)
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// # Errors
    ///
    /// Returns `SqliteInitError` if a migration query fails.
    pub async fn migrate(&self) -> Result<(), SqliteInitError> {
        migrate::run_migrations(&self.pool).await
    }
}

impl Storage {
    /// Cache storage backed by the `SQLite` database at `database_url`.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the database cannot be opened or migrated.
    pub async fn sqlite(database_url: &str) -> Result<Self, SqliteInitError> {
        let caches: Arc<dyn CacheStorage> =
            Arc::new(SqliteCacheRepository::open(database_url).await?);
        Ok(Self { caches })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteCacheRepository>();
    }

    #[tokio::test]
    async fn connections_enforce_foreign_keys() {
        let repo = SqliteCacheRepository::open("sqlite:file:memdb_pragmas?mode=memory&cache=shared")
            .await
            .expect("open");
        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(repo.pool())
            .await
            .expect("pragma");
        assert_eq!(enabled, 1);

        let orphan = sqlx::query(
            "INSERT INTO cache_entries (region, method, url, status, headers, body, stored_at)
             VALUES ('missing', 'GET', 'http://localhost:8000/', 200, '[]', x'', '2026-01-01T00:00:00Z')",
        )
        .execute(repo.pool())
        .await;
        assert!(orphan.is_err(), "entry without a region must be rejected");
    }
}
