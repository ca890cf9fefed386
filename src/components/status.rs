//! Status bar component.
//!
//! Displays the app name, feed connection state, and the timestamp of the
//! snapshot currently on screen. On narrow viewports the timestamp is
//! dropped to keep the bar on one line.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_VERSION};
use crate::utils::format;

#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let is_narrow = use_media_query("(max-width: 768px)");

    let feed_label = Signal::derive(move || ctx.feed.get().label());
    let feed_class = Signal::derive(move || format!("feed-dot {}", ctx.feed.get().css_class()));
    let snapshot_clock = Signal::derive(move || {
        ctx.scanner
            .with(|s| s.as_ref().map(|snap| format::format_clock(&snap.ts)))
            .unwrap_or_else(|| "--:--:--".to_string())
    });

    view! {
        <header class="status-bar">
            <span class="app-name">{APP_NAME} " " <small>{"v"} {APP_VERSION}</small></span>
            <div class="status-meta">
                <Show when=move || !is_narrow.get()>
                    <span class="snapshot-ts">"snapshot " {snapshot_clock}</span>
                </Show>
                <span>
                    <span class=feed_class></span>
                    {feed_label}
                </span>
                <Icon icon=ic::NETWORK />
            </div>
        </header>
    }
}
