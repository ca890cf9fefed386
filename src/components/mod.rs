//! UI components built with Leptos.
//!
//! - [`Shell`] - Page scaffold (status bar, controls, main area)
//! - [`benchmarks`] - Benchmark regime cards
//! - [`controls`] - Timeframe selector, signal filter, symbol search
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`scanner`] - The scanner table
//! - [`status`] - Status bar showing feed state and snapshot time

pub mod benchmarks;
pub mod controls;
pub mod icons;
pub mod scanner;
mod shell;
pub mod status;

pub use shell::Shell;
