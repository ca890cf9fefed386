//! Core application logic, independent of any particular component.
//!
//! - [`error`] - Error types for fetch and feed failures
//! - [`feed`] - Live data feed (REST warm load + WebSocket subscription)
//! - [`view`] - Pure scanner table logic (sorting, filtering, search)

pub mod error;
pub mod feed;
pub mod view;
