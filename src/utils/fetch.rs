//! Network fetching utilities with timeout support.
//!
//! Wraps the browser Fetch API with `Promise.race`-based timeouts and JSON
//! decoding into the backend payload types.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::utils::dom;

// =============================================================================
// Promise Racing
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// The timeout promise resolves to `undefined`, so callers whose real
/// promise can legitimately resolve to `undefined` cannot use this.
/// Fetch responses never do.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = dom::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);

    match JsFuture::from(Promise::race(&race_array)).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch
// =============================================================================

/// Fetch a URL and decode its JSON body.
///
/// Enforces [`FETCH_TIMEOUT_MS`] and maps non-2xx statuses to
/// [`FetchError::HttpStatus`].
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let window = dom::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let response = match race_with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS)
        .await
    {
        RaceResult::Completed(value) => value
            .dyn_into::<Response>()
            .map_err(|_| FetchError::BodyReadFailed)?,
        RaceResult::TimedOut => return Err(FetchError::Timeout),
        RaceResult::Error(msg) => return Err(FetchError::NetworkError(msg)),
    };

    if !response.ok() {
        return Err(FetchError::HttpStatus(response.status()));
    }

    let text_promise = response.text().map_err(|_| FetchError::BodyReadFailed)?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| FetchError::BodyReadFailed)?
        .as_string()
        .ok_or(FetchError::BodyReadFailed)?;

    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}
