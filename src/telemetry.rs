//! Metrics tracking.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct Metrics {
    pub entries_written: AtomicU64,
    pub writes_rejected: AtomicU64,
    pub reads_served: AtomicU64,
    pub reads_rejected: AtomicU64,
    pub store_failures: AtomicU64,
    pub unexpected_failures: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_write(&self) {
        self.entries_written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_write_rejected(&self) {
        self.writes_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_read(&self) {
        self.reads_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_read_rejected(&self) {
        self.reads_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_failure(&self) {
        self.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unexpected(&self) {
        self.unexpected_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            entries_written: self.entries_written.load(Ordering::Relaxed),
            writes_rejected: self.writes_rejected.load(Ordering::Relaxed),
            reads_served: self.reads_served.load(Ordering::Relaxed),
            reads_rejected: self.reads_rejected.load(Ordering::Relaxed),
            store_failures: self.store_failures.load(Ordering::Relaxed),
            unexpected_failures: self.unexpected_failures.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub entries_written: u64,
    pub writes_rejected: u64,
    pub reads_served: u64,
    pub reads_rejected: u64,
    pub store_failures: u64,
    pub unexpected_failures: u64,
}
