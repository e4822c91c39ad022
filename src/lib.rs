//! Log events: append a log entry, read back the most recent ones.

pub mod config;
pub mod console;
pub mod entry;
pub mod error;
pub mod handlers;
pub mod reader;
pub mod server;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod validate;
pub mod writer;
