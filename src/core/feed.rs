//! Live data feed.
//!
//! Keeps the [`AppContext`] snapshots current for the selected timeframe:
//!
//! 1. Warm start from the sessionStorage cache, so a reload paints data
//!    immediately.
//! 2. One REST round-trip for the current scanner and benchmark snapshots.
//! 3. A WebSocket subscription to `/ws/scanner`; the backend pushes a full
//!    [`ScannerSnapshot`] after every compute cycle.
//!
//! When the socket drops, the feed reconnects with bounded exponential
//! backoff and re-polls REST on an interval until the socket is back.
//! Changing the timeframe bumps a generation counter; callbacks belonging
//! to an older generation drop their work instead of applying stale data.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config;
use crate::models::{BenchmarksSnapshot, FeedStatus, ScannerSnapshot, Timeframe};
use crate::utils::{cache, dom, fetch_json};

/// Start the feed. Runs once from the root component; re-runs its body
/// whenever the selected timeframe changes.
pub fn start(ctx: AppContext) {
    Effect::new(move |_| {
        let timeframe = ctx.timeframe.get();
        let generation = ctx.feed_generation.get_untracked() + 1;
        ctx.feed_generation.set(generation);
        ctx.feed.set(FeedStatus::Connecting);

        // Tear down the previous generation's socket. The generation is
        // already bumped, so its close event cannot schedule a retry.
        if let Some(old) = ctx.socket.try_update_value(|s| s.take()).flatten() {
            let _ = old.close();
        }

        // Warm start while the network round-trip is in flight.
        if let Some(snapshot) = cache::load_scanner(timeframe) {
            ctx.scanner.set(Some(snapshot));
        }
        if let Some(snapshot) = cache::load_benchmarks(timeframe) {
            ctx.benchmarks.set(Some(snapshot));
        }

        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(refresh(ctx, timeframe, generation));
            open_socket(ctx, timeframe, generation, 0);
        }
    });
}

/// Whether `generation` is still the active feed generation.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn is_current(ctx: AppContext, generation: u64) -> bool {
    ctx.feed_generation.get_untracked() == generation
}

/// Reconnect delay for the given attempt number (first retry is attempt 1).
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn backoff_ms(attempt: u32) -> u32 {
    let shift = attempt.saturating_sub(1).min(31);
    config::RECONNECT_BASE_MS
        .saturating_mul(1u32.checked_shl(shift).unwrap_or(u32::MAX))
        .min(config::RECONNECT_MAX_MS)
}

/// Fetch both snapshots over REST and apply them if still current.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
async fn refresh(ctx: AppContext, timeframe: Timeframe, generation: u64) {
    let scanner = fetch_json::<ScannerSnapshot>(&config::scanner_url(timeframe)).await;
    if !is_current(ctx, generation) {
        return;
    }
    match scanner {
        Ok(snapshot) => {
            cache::store_scanner(&snapshot);
            ctx.scanner.set(Some(snapshot));
        }
        Err(err) => {
            dom::console_warn(&format!("scanner fetch failed: {err}"));
            if ctx.scanner.get_untracked().is_none() {
                ctx.feed.set(FeedStatus::Offline);
            }
        }
    }

    let benchmarks = fetch_json::<BenchmarksSnapshot>(&config::benchmarks_url(timeframe)).await;
    if !is_current(ctx, generation) {
        return;
    }
    match benchmarks {
        Ok(snapshot) => {
            cache::store_benchmarks(&snapshot);
            ctx.benchmarks.set(Some(snapshot));
        }
        Err(err) => dom::console_warn(&format!("benchmarks fetch failed: {err}")),
    }
}

/// Open the scanner WebSocket for `timeframe`.
///
/// `attempt` counts connection attempts within the current down period;
/// 0 is the initial connection.
#[cfg(target_arch = "wasm32")]
fn open_socket(ctx: AppContext, timeframe: Timeframe, generation: u64, attempt: u32) {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;
    use web_sys::{CloseEvent, MessageEvent, WebSocket};

    use crate::core::error::FeedError;

    if !is_current(ctx, generation) {
        return;
    }

    let url = config::scanner_ws_url(timeframe);
    let ws = match WebSocket::new(&url) {
        Ok(ws) => ws,
        Err(err) => {
            let err = FeedError::SocketCreationFailed(format!("{err:?}"));
            dom::console_warn(&err.to_string());
            ctx.feed.set(FeedStatus::Polling);
            schedule_retry(ctx, timeframe, generation, attempt + 1);
            return;
        }
    };

    ctx.socket.set_value(Some(ws.clone()));

    // Tracks whether this socket ever connected, so the backoff restarts
    // after a drop instead of continuing where the last outage left off.
    let opened = Rc::new(Cell::new(false));

    let onopen_ws = ws.clone();
    let onopen_opened = Rc::clone(&opened);
    let onopen = Closure::<dyn FnMut()>::new(move || {
        if !is_current(ctx, generation) {
            let _ = onopen_ws.close();
            return;
        }
        onopen_opened.set(true);
        ctx.feed.set(FeedStatus::Live);
    });
    ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
    onopen.forget();

    let onmessage_ws = ws.clone();
    let onmessage = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        if !is_current(ctx, generation) {
            let _ = onmessage_ws.close();
            return;
        }
        let Some(text) = event.data().as_string() else {
            return;
        };
        match serde_json::from_str::<ScannerSnapshot>(&text) {
            Ok(snapshot) => {
                cache::store_scanner(&snapshot);
                ctx.scanner.set(Some(snapshot));
            }
            Err(err) => {
                let err = FeedError::BadPayload(err.to_string());
                dom::console_warn(&err.to_string());
            }
        }
    });
    ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
    onmessage.forget();

    // The browser fires close after error as well, so one handler covers
    // both failure paths without double-scheduling a retry.
    let onclose = Closure::<dyn FnMut(CloseEvent)>::new(move |_event: CloseEvent| {
        if !is_current(ctx, generation) {
            return;
        }
        ctx.feed.set(FeedStatus::Polling);
        let next_attempt = if opened.get() { 1 } else { attempt + 1 };
        schedule_retry(ctx, timeframe, generation, next_attempt);
    });
    ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
    onclose.forget();
}

/// Schedule a reconnect attempt after the backoff delay. The first retry
/// of a down period also starts the REST poll loop.
#[cfg(target_arch = "wasm32")]
fn schedule_retry(ctx: AppContext, timeframe: Timeframe, generation: u64, attempt: u32) {
    if attempt == 1 {
        wasm_bindgen_futures::spawn_local(poll_loop(ctx, timeframe, generation));
    }
    let delay = backoff_ms(attempt);
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay).await;
        if !is_current(ctx, generation) {
            return;
        }
        open_socket(ctx, timeframe, generation, attempt);
    });
}

/// Re-poll REST while the socket is down. Exits when the socket comes back
/// or the generation moves on.
#[cfg(target_arch = "wasm32")]
async fn poll_loop(ctx: AppContext, timeframe: Timeframe, generation: u64) {
    loop {
        gloo_timers::future::TimeoutFuture::new(config::POLL_INTERVAL_MS).await;
        if !is_current(ctx, generation) || ctx.feed.get_untracked() == FeedStatus::Live {
            return;
        }
        refresh(ctx, timeframe, generation).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_from_base() {
        assert_eq!(backoff_ms(1), config::RECONNECT_BASE_MS);
        assert_eq!(backoff_ms(2), config::RECONNECT_BASE_MS * 2);
        assert_eq!(backoff_ms(3), config::RECONNECT_BASE_MS * 4);
    }

    #[test]
    fn test_backoff_is_capped() {
        assert_eq!(backoff_ms(10), config::RECONNECT_MAX_MS);
        assert_eq!(backoff_ms(u32::MAX), config::RECONNECT_MAX_MS);
    }
}
