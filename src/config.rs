//! Process configuration from environment variables.
//! Used by: main, state.

use crate::store::sqlite::is_valid_table_name;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DB_PATH: &str = "log-events.db";
pub const DEFAULT_TABLE: &str = "log_events";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    /// SQLite database path; `:memory:` keeps entries for the process lifetime only.
    pub db_path: String,
    pub table: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("LOG_EVENTS_TABLE must match [A-Za-z_][A-Za-z0-9_]*, got {0:?}")]
    InvalidTable(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            db_path: DEFAULT_DB_PATH.into(),
            table: DEFAULT_TABLE.into(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            db_path: lookup("LOG_EVENTS_DB").unwrap_or(defaults.db_path),
            table: lookup("LOG_EVENTS_TABLE").unwrap_or(defaults.table),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_addr.is_empty() {
            return Err(ConfigError::Empty("BIND_ADDR"));
        }
        if self.db_path.is_empty() {
            return Err(ConfigError::Empty("LOG_EVENTS_DB"));
        }
        if !is_valid_table_name(&self.table) {
            return Err(ConfigError::InvalidTable(self.table.clone()));
        }
        Ok(())
    }
}
