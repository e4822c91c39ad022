//! Read path: most recent log entries, newest first.
//! Used by: handlers::read.

use axum::http::Method;

use crate::entry::LogEntry;
use crate::error::{Error, Result};
use crate::store::LogStore;

pub const MAX_RESULTS: usize = 100;

pub fn read(store: &dyn LogStore, method: &Method) -> Result<Vec<LogEntry>> {
    if method != Method::GET {
        return Err(Error::MethodNotAllowed("GET"));
    }
    let mut entries = store.scan_all().map_err(Error::Retrieval)?;
    let scanned = entries.len();

    // Stable: entries sharing a dateTime keep their scan order.
    entries.sort_by(|a, b| b.date_time.cmp(&a.date_time));
    entries.truncate(MAX_RESULTS);

    tracing::info!(scanned, returned = entries.len(), "log entries read");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Severity;
    use crate::store::memory::MemoryStore;
    use crate::store::testing::{CountingStore, FailingStore};

    fn entry(id: &str, date_time: i64) -> LogEntry {
        LogEntry {
            id: id.into(),
            severity: Severity::Info,
            message: format!("message {id}"),
            date_time,
        }
    }

    fn date_times(entries: &[LogEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.date_time).collect()
    }

    #[test]
    fn newest_first() -> Result<()> {
        let store = MemoryStore::with_entries(vec![entry("a", 100), entry("b", 300), entry("c", 200)]);
        let entries = read(&store, &Method::GET)?;
        assert_eq!(date_times(&entries), [300, 200, 100]);
        Ok(())
    }

    #[test]
    fn empty_store_returns_empty_vec() -> Result<()> {
        let entries = read(&MemoryStore::new(), &Method::GET)?;
        assert!(entries.is_empty());
        Ok(())
    }

    #[test]
    fn truncates_to_max_results() -> Result<()> {
        let seeded = (0..250).map(|i| entry(&format!("id-{i}"), (i * 7919) % 1000)).collect();
        let store = MemoryStore::with_entries(seeded);
        let entries = read(&store, &Method::GET)?;
        assert_eq!(entries.len(), MAX_RESULTS);
        assert!(entries.windows(2).all(|w| w[0].date_time >= w[1].date_time));

        let mut all = date_times(&store.scan_all().map_err(Error::Retrieval)?);
        all.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(date_times(&entries), all[..MAX_RESULTS]);
        Ok(())
    }

    #[test]
    fn ties_keep_scan_order() -> Result<()> {
        let store = MemoryStore::with_entries(vec![
            entry("first", 5),
            entry("older", 1),
            entry("second", 5),
            entry("third", 5),
        ]);
        let ids: Vec<_> = read(&store, &Method::GET)?.into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["first", "second", "third", "older"]);
        Ok(())
    }

    #[test]
    fn repeated_reads_are_identical() -> Result<()> {
        let store = MemoryStore::with_entries(vec![entry("a", 2), entry("b", 2), entry("c", 9)]);
        let first = read(&store, &Method::GET)?;
        let second = read(&store, &Method::GET)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn wrong_method_rejected_before_scan() {
        let store = CountingStore::with_entries(vec![entry("a", 1)]);
        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let result = read(&store, &method);
            assert!(matches!(result, Err(Error::MethodNotAllowed("GET"))));
        }
        assert_eq!(store.scan_calls(), 0);
    }

    #[test]
    fn store_failure_is_retrieval_error() {
        let result = read(&FailingStore, &Method::GET);
        assert!(matches!(result, Err(Error::Retrieval(_))));
    }

    #[test]
    fn read_does_not_write() -> Result<()> {
        let store = CountingStore::with_entries(vec![entry("a", 1)]);
        read(&store, &Method::GET)?;
        assert_eq!(store.put_calls(), 0);
        assert_eq!(store.scan_calls(), 1);
        Ok(())
    }
}
