//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`cache`] - sessionStorage warm-start caching for snapshots
//! - [`dom`] - Safe access to browser APIs
//! - [`fetch_json`] - Network fetching with timeout
//! - [`format`] - Display formatting for metrics and timestamps

pub mod cache;
pub mod dom;
mod fetch;
pub mod format;

pub use fetch::fetch_json;
