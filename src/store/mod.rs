//! Durable record store boundary: put one entry, scan all entries.
//! Used by: writer, reader, state.

pub mod memory;
pub mod sqlite;

use crate::entry::LogEntry;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("store lock poisoned: {0}")]
    Lock(String),

    #[error("corrupt record: {0}")]
    Corrupt(String),

    #[error("invalid table name: {0:?}")]
    InvalidTable(String),
}

pub trait LogStore: Send + Sync {
    fn put(&self, entry: &LogEntry) -> Result<(), StoreError>;

    /// Every stored entry, in the store's natural scan order.
    fn scan_all(&self) -> Result<Vec<LogEntry>, StoreError>;
}

pub(crate) fn lock_err<E: std::fmt::Display>(what: &'static str) -> impl Fn(E) -> StoreError {
    move |e| StoreError::Lock(format!("{what}: {e}"))
}
