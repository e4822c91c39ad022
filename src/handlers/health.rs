//! Health check endpoint.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use std::sync::atomic::Ordering::Relaxed;

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "requests": state.request_count.load(Relaxed),
    }))
}
