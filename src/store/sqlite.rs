//! SQLite-backed log store.
//! Used by: state.

use std::sync::Mutex;

use rusqlite::Connection;

use crate::entry::{LogEntry, Severity};
use crate::store::{lock_err, LogStore, StoreError};

pub struct SqliteStore {
    conn: Mutex<Connection>,
    table: String,
}

/// `[A-Za-z_][A-Za-z0-9_]*`; the name is interpolated into SQL.
pub fn is_valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl SqliteStore {
    pub fn open(path: &str, table: &str) -> Result<Self, StoreError> {
        if !is_valid_table_name(table) {
            return Err(StoreError::InvalidTable(table.to_owned()));
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS \"{table}\" (
                id TEXT PRIMARY KEY,
                severity TEXT NOT NULL CHECK (severity IN ('info', 'warning', 'error')),
                message TEXT NOT NULL,
                date_time INTEGER NOT NULL
            )"
        ))?;
        Ok(Self {
            conn: Mutex::new(conn),
            table: table.to_owned(),
        })
    }

    pub fn open_in_memory(table: &str) -> Result<Self, StoreError> {
        Self::open(":memory:", table)
    }
}

impl LogStore for SqliteStore {
    fn put(&self, entry: &LogEntry) -> Result<(), StoreError> {
        let conn = self.conn.lock().map_err(lock_err("sqlite store"))?;
        conn.execute(
            &format!(
                "INSERT INTO \"{}\" (id, severity, message, date_time) VALUES (?1, ?2, ?3, ?4)",
                self.table
            ),
            (&entry.id, entry.severity.as_str(), &entry.message, entry.date_time),
        )?;
        Ok(())
    }

    fn scan_all(&self) -> Result<Vec<LogEntry>, StoreError> {
        let conn = self.conn.lock().map_err(lock_err("sqlite store"))?;
        let mut stmt = conn.prepare(&format!(
            "SELECT id, severity, message, date_time FROM \"{}\" ORDER BY rowid",
            self.table
        ))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, severity, message, date_time)| {
                let severity = Severity::parse(&severity).ok_or_else(|| {
                    StoreError::Corrupt(format!("entry {id} has unknown severity {severity:?}"))
                })?;
                Ok(LogEntry { id, severity, message, date_time })
            })
            .collect()
    }
}
