//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The API base URL can be overridden at runtime through localStorage,
//! everything else is fixed at compile time.

use crate::models::Timeframe;
use crate::utils::dom;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the status bar.
pub const APP_NAME: &str = "RELSCAN";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Backend Endpoints
// =============================================================================

/// Default backend origin when no localStorage override is present.
pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:8000";

/// localStorage key holding an API origin override.
pub const API_ORIGIN_KEY: &str = "relscan.api_origin";

/// Backend origin for REST requests.
///
/// Reads the localStorage override first so a deployed bundle can point at
/// a different backend without a rebuild.
pub fn api_origin() -> String {
    dom::local_storage()
        .and_then(|s| s.get_item(API_ORIGIN_KEY).ok().flatten())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_ORIGIN.to_string())
}

/// REST URL for the scanner snapshot.
pub fn scanner_url(timeframe: Timeframe) -> String {
    format!("{}/scanner?timeframe={}", api_origin(), timeframe.as_str())
}

/// REST URL for the benchmark states.
pub fn benchmarks_url(timeframe: Timeframe) -> String {
    format!(
        "{}/benchmarks?timeframe={}",
        api_origin(),
        timeframe.as_str()
    )
}

/// WebSocket URL for live scanner pushes.
///
/// Derived from the REST origin by swapping the scheme (`http` -> `ws`,
/// `https` -> `wss`).
pub fn scanner_ws_url(timeframe: Timeframe) -> String {
    let origin = api_origin();
    let ws_origin = if let Some(rest) = origin.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = origin.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        format!("ws://{origin}")
    };
    format!("{}/ws/scanner?timeframe={}", ws_origin, timeframe.as_str())
}

// =============================================================================
// Timeframes
// =============================================================================

/// Timeframes the backend computes, in selector order.
pub const TIMEFRAMES: &[Timeframe] = &[
    Timeframe::M5,
    Timeframe::M15,
    Timeframe::H1,
    Timeframe::D1,
];

/// Timeframe selected on first visit.
pub const DEFAULT_TIMEFRAME: Timeframe = Timeframe::M5;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Initial WebSocket reconnect delay in milliseconds.
pub const RECONNECT_BASE_MS: u32 = 1_000;

/// Upper bound for the reconnect backoff in milliseconds.
pub const RECONNECT_MAX_MS: u32 = 30_000;

/// REST re-poll interval while the socket is down, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 15_000;

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache keys.
pub mod cache {
    use crate::models::Timeframe;

    /// sessionStorage key for the last scanner snapshot per timeframe.
    pub fn scanner_key(timeframe: Timeframe) -> String {
        format!("scanner_cache:{}", timeframe.as_str())
    }

    /// sessionStorage key for the last benchmark snapshot per timeframe.
    pub fn benchmarks_key(timeframe: Timeframe) -> String {
        format!("benchmarks_cache:{}", timeframe.as_str())
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_ws_url_swaps_scheme() {
        // No localStorage off-wasm, so the default origin applies.
        let url = scanner_ws_url(Timeframe::M5);
        assert!(url.starts_with("ws://"), "got {url}");
        assert!(url.ends_with("/ws/scanner?timeframe=5m"));
    }

    #[test]
    fn test_rest_urls_carry_timeframe() {
        assert!(scanner_url(Timeframe::H1).ends_with("/scanner?timeframe=1h"));
        assert!(benchmarks_url(Timeframe::D1).ends_with("/benchmarks?timeframe=1d"));
    }

    #[test]
    fn test_default_timeframe_is_listed() {
        assert!(TIMEFRAMES.contains(&DEFAULT_TIMEFRAME));
    }
}
