//! Shared application state.

use std::sync::atomic::{AtomicU64, Ordering::Relaxed};
use std::sync::Arc;

use crate::config::Config;
use crate::store::memory::MemoryStore;
use crate::store::sqlite::SqliteStore;
use crate::store::{LogStore, StoreError};
use crate::telemetry::Metrics;

pub struct AppStateInner {
    pub store: Arc<dyn LogStore>,
    pub metrics: Metrics,
    pub request_count: AtomicU64,
}

pub type AppState = Arc<AppStateInner>;

impl AppStateInner {
    pub fn increment_requests(&self) {
        let n = self.request_count.fetch_add(1, Relaxed) + 1;
        if n % 1000 == 0 {
            tracing::warn!(count = n, "high request volume");
        }
    }
}

pub fn build_state_with_store(store: Arc<dyn LogStore>) -> AppState {
    Arc::new(AppStateInner {
        store,
        metrics: Metrics::new(),
        request_count: AtomicU64::new(0),
    })
}

pub fn build_state(config: &Config) -> Result<AppState, StoreError> {
    let store = SqliteStore::open(&config.db_path, &config.table)?;
    tracing::info!(db = %config.db_path, table = %config.table, "opened log store");
    Ok(build_state_with_store(Arc::new(store)))
}

pub fn build_test_state() -> AppState {
    build_state_with_store(Arc::new(MemoryStore::new()))
}
