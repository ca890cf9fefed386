//! Snapshot warm-start caching.
//!
//! Stores the last snapshot per timeframe in sessionStorage so a reload
//! paints data immediately while the first fetch is in flight. The browser
//! clears sessionStorage when the tab closes, so stale data never survives
//! a session.

use crate::config;
use crate::models::{BenchmarksSnapshot, ScannerSnapshot, Timeframe};

use super::dom;

/// Last scanner snapshot stored for this timeframe, if any.
pub fn load_scanner(timeframe: Timeframe) -> Option<ScannerSnapshot> {
    read(&config::cache::scanner_key(timeframe))
}

/// Store the scanner snapshot for its timeframe. Best effort.
pub fn store_scanner(snapshot: &ScannerSnapshot) {
    write(&config::cache::scanner_key(snapshot.timeframe), snapshot);
}

/// Last benchmark snapshot stored for this timeframe, if any.
pub fn load_benchmarks(timeframe: Timeframe) -> Option<BenchmarksSnapshot> {
    read(&config::cache::benchmarks_key(timeframe))
}

/// Store the benchmark snapshot for its timeframe. Best effort.
pub fn store_benchmarks(snapshot: &BenchmarksSnapshot) {
    write(&config::cache::benchmarks_key(snapshot.timeframe), snapshot);
}

fn read<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

fn write<T: serde::Serialize>(key: &str, data: &T) {
    let Some(storage) = dom::session_storage() else {
        return;
    };
    let Ok(json) = serde_json::to_string(data) else {
        return;
    };
    let _ = storage.set_item(key, &json);
}
