//! Write path: validate, stamp, and persist one log entry.
//! Used by: handlers::write.

use axum::http::Method;
use chrono::Utc;

use crate::entry::LogEntry;
use crate::error::{Error, Result};
use crate::store::LogStore;
use crate::validate::validate;

pub fn check_method(method: &Method) -> Result<()> {
    if method != Method::POST {
        return Err(Error::MethodNotAllowed("POST"));
    }
    Ok(())
}

pub fn write(store: &dyn LogStore, method: &Method, body: &[u8]) -> Result<LogEntry> {
    check_method(method)?;
    if body.is_empty() {
        return Err(Error::MissingBody);
    }
    let payload: serde_json::Value = serde_json::from_slice(body).map_err(Error::MalformedInput)?;
    let new = validate(&payload)?;

    let entry = LogEntry::stamp(
        new,
        uuid::Uuid::new_v4().to_string(),
        Utc::now().timestamp_millis(),
    );
    store.put(&entry).map_err(Error::Persistence)?;

    tracing::info!(id = %entry.id, severity = %entry.severity, date_time = entry.date_time, "log entry written");
    Ok(entry)
}
