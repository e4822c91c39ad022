//! Log entry record shared by the write and read paths.
//! Used by: validate, writer, reader, store.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Case-sensitive; anything but the three lowercase names is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated client input, before the server stamps identity and time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogEntry {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub severity: Severity,
    pub message: String,
    /// Milliseconds since the Unix epoch.
    pub date_time: i64,
}

impl LogEntry {
    pub fn stamp(new: NewLogEntry, id: String, date_time: i64) -> Self {
        Self {
            id,
            severity: new.severity,
            message: new.message,
            date_time,
        }
    }
}
