//! Log entry write endpoint.
//! Used by: server.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::Method;
use axum::Json;

use crate::entry::LogEntry;
use crate::error::{Error, Result};
use crate::state::AppState;
use crate::writer;

/// Accepts every verb; the writer answers non-POST requests with 405.
/// A body that fails to arrive is only reported once the verb is known to be POST.
pub async fn write(
    State(state): State<AppState>,
    method: Method,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<LogEntry>> {
    state.increment_requests();
    let result = match body {
        Ok(body) => {
            let worker = state.clone();
            tokio::task::spawn_blocking(move || {
                writer::write(worker.store.as_ref(), &method, &body)
            })
            .await
            .unwrap_or_else(|e| Err(Error::Unexpected(e.to_string())))
        }
        Err(rejection) => writer::check_method(&method)
            .and_then(|()| Err(Error::UnreadableBody(rejection.body_text()))),
    };

    match result {
        Ok(entry) => {
            state.metrics.record_write();
            Ok(Json(entry))
        }
        Err(e) => {
            match &e {
                Error::Unexpected(_) => state.metrics.record_unexpected(),
                _ if e.status().is_client_error() => {
                    tracing::warn!(error = %e, "log entry rejected");
                    state.metrics.record_write_rejected();
                }
                _ => state.metrics.record_store_failure(),
            }
            Err(e)
        }
    }
}
