use chrono::Utc;
use flash_core::model::{ResourceRequest, ResourceResponse};

use super::{
    SqliteCacheRepository,
    mapping::{headers_to_json, map_response_row},
};
use crate::repository::{CacheStorage, StorageError};

#[async_trait::async_trait]
impl CacheStorage for SqliteCacheRepository {
    async fn has_region(&self, name: &str) -> Result<bool, StorageError> {
        let row = sqlx::query("SELECT 1 FROM cache_regions WHERE name = ?1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(row.is_some())
    }

    async fn store_region(
        &self,
        name: &str,
        entries: &[(ResourceRequest, ResourceResponse)],
    ) -> Result<(), StorageError> {
        let now = Utc::now();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO cache_regions (name, created_at)
            VALUES (?1, ?2)
            ON CONFLICT(name) DO NOTHING
            ",
        )
        .bind(name)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        for (request, response) in entries {
            sqlx::query(
                r"
                INSERT INTO cache_entries (region, method, url, status, headers, body, stored_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                ON CONFLICT(region, method, url) DO UPDATE SET
                    status = excluded.status,
                    headers = excluded.headers,
                    body = excluded.body,
                    stored_at = excluded.stored_at
                ",
            )
            .bind(name)
            .bind(request.method())
            .bind(request.url().as_str())
            .bind(i64::from(response.status))
            .bind(headers_to_json(&response.headers)?)
            .bind(response.body.as_slice())
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }

    async fn match_request(
        &self,
        name: &str,
        request: &ResourceRequest,
    ) -> Result<Option<ResourceResponse>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT status, headers, body
            FROM cache_entries
            WHERE region = ?1 AND method = ?2 AND url = ?3
            ",
        )
        .bind(name)
        .bind(request.method())
        .bind(request.url().as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.as_ref().map(map_response_row).transpose()
    }

    async fn region_names(&self) -> Result<Vec<String>, StorageError> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT name FROM cache_regions ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(names)
    }
}
