//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use web_sys::WebSocket;

use crate::components::Shell;
use crate::config::DEFAULT_TIMEFRAME;
use crate::core::feed;
use crate::core::view::TableView;
use crate::models::{BenchmarksSnapshot, FeedStatus, ScannerSnapshot, Timeframe};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Timeframe the scanner is currently showing.
    pub timeframe: RwSignal<Timeframe>,
    /// Latest scanner snapshot, `None` until the first load completes.
    pub scanner: RwSignal<Option<ScannerSnapshot>>,
    /// Latest benchmark snapshot, `None` until the first load completes.
    pub benchmarks: RwSignal<Option<BenchmarksSnapshot>>,
    /// Live feed connection state for the status bar.
    pub feed: RwSignal<FeedStatus>,
    /// Table view state (sort, filter, search).
    pub view: RwSignal<TableView>,
    /// Feed generation counter. Bumped on every timeframe change so stale
    /// socket callbacks and fetches drop their results.
    pub feed_generation: RwSignal<u64>,
    /// Handle to the currently open scanner socket, so a timeframe change
    /// can close it eagerly instead of waiting for its next event.
    /// Local storage: a `WebSocket` is a JS handle and never leaves the
    /// main thread.
    pub socket: StoredValue<Option<WebSocket>, LocalStorage>,
}

impl AppContext {
    /// Creates a new application context with default state: default
    /// timeframe, no snapshots yet, feed connecting, untouched table view.
    pub fn new() -> Self {
        Self {
            timeframe: RwSignal::new(DEFAULT_TIMEFRAME),
            scanner: RwSignal::new(None),
            benchmarks: RwSignal::new(None),
            feed: RwSignal::new(FeedStatus::Connecting),
            view: RwSignal::new(TableView::default()),
            feed_generation: RwSignal::new(0),
            socket: StoredValue::new_local(None),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the live data feed for the selected timeframe
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the Shell layout
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    feed::start(ctx);

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="shell">
                    <div class="empty-state">
                        <h1>"Something went wrong"</h1>
                        <p>"An unexpected error occurred. Please try reloading the page."</p>
                        <ul>
                            {move || {
                                errors
                                    .get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                        <button on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }>
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        }>
            <Shell />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults() {
        let ctx = AppContext::new();
        assert_eq!(ctx.timeframe.get_untracked(), DEFAULT_TIMEFRAME);
        assert!(ctx.scanner.get_untracked().is_none());
        assert!(ctx.benchmarks.get_untracked().is_none());
        assert_eq!(ctx.feed.get_untracked(), FeedStatus::Connecting);
        assert_eq!(ctx.feed_generation.get_untracked(), 0);
        // No socket before the feed opens one; the feed closes and clears
        // it through this same slot on every timeframe change.
        assert!(ctx.socket.with_value(|s| s.is_none()));
    }
}
