//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Timeframe`] - Candle timeframes supported by the backend
//! - [`ScannerRow`], [`ScannerSnapshot`], [`TradeSignal`] - Scanner payloads
//! - [`BenchmarkState`], [`BenchmarksSnapshot`], [`Regime`] - Benchmark payloads
//! - [`FeedStatus`] - Live feed connection state

mod benchmark;
mod feed;
mod scanner;
mod timeframe;

pub use benchmark::{BenchmarkState, BenchmarksSnapshot, Regime};
pub use feed::FeedStatus;
pub use scanner::{ScannerRow, ScannerSnapshot, TradeSignal};
pub use timeframe::Timeframe;
