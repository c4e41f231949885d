use flash_core::model::ResourceResponse;
use sqlx::Row;

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn headers_to_json(headers: &[(String, String)]) -> Result<String, StorageError> {
    serde_json::to_string(headers).map_err(ser)
}

pub(crate) fn map_response_row(row: &sqlx::sqlite::SqliteRow) -> Result<ResourceResponse, StorageError> {
    let status: i64 = row.try_get("status").map_err(ser)?;
    let status = u16::try_from(status)
        .map_err(|_| StorageError::Serialization(format!("invalid status: {status}")))?;
    let headers: String = row.try_get("headers").map_err(ser)?;
    let headers: Vec<(String, String)> = serde_json::from_str(&headers).map_err(ser)?;
    let body: Vec<u8> = row.try_get("body").map_err(ser)?;

    Ok(ResourceResponse::new(status, headers, body))
}
