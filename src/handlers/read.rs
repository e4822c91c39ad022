//! Recent log entries endpoint.
//! Used by: server.

use axum::extract::State;
use axum::http::Method;
use axum::Json;

use crate::entry::LogEntry;
use crate::error::{Error, Result};
use crate::reader;
use crate::state::AppState;

/// Accepts every verb; the reader answers non-GET requests with 405.
pub async fn recent(State(state): State<AppState>, method: Method) -> Result<Json<Vec<LogEntry>>> {
    state.increment_requests();
    let worker = state.clone();
    let result = tokio::task::spawn_blocking(move || reader::read(worker.store.as_ref(), &method))
        .await
        .unwrap_or_else(|e| Err(Error::Unexpected(e.to_string())));

    match result {
        Ok(entries) => {
            state.metrics.record_read();
            Ok(Json(entries))
        }
        Err(e) => {
            match &e {
                Error::Unexpected(_) => state.metrics.record_unexpected(),
                _ if e.status().is_client_error() => {
                    tracing::warn!(error = %e, "log read rejected");
                    state.metrics.record_read_rejected();
                }
                _ => state.metrics.record_store_failure(),
            }
            Err(e)
        }
    }
}
