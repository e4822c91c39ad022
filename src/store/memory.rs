//! In-process log store, insertion-ordered.
//! Used by: state (test state), tests.

use std::sync::Mutex;

use crate::entry::LogEntry;
use crate::store::{lock_err, LogStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<LogEntry>) -> Self {
        Self { entries: Mutex::new(entries) }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogStore for MemoryStore {
    fn put(&self, entry: &LogEntry) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(lock_err("memory store"))?;
        entries.push(entry.clone());
        Ok(())
    }

    fn scan_all(&self) -> Result<Vec<LogEntry>, StoreError> {
        let entries = self.entries.lock().map_err(lock_err("memory store"))?;
        Ok(entries.clone())
    }
}
