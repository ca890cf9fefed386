//! Scanner snapshot payloads.
//!
//! Mirrors the JSON the backend serves over `GET /scanner` and pushes over
//! the `/ws/scanner` WebSocket. Both carry the same [`ScannerSnapshot`]
//! shape, so one set of types covers the REST warm load and live updates.

use serde::{Deserialize, Serialize};

use super::Timeframe;

/// Classification emitted by the relative-strength indicator stack.
///
/// Wire strings are the backend's exact vocabulary, including the slash in
/// `EXIT/AVOID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSignal {
    #[serde(rename = "TRIGGER_LONG")]
    TriggerLong,
    #[serde(rename = "TRIGGER_SHORT")]
    TriggerShort,
    #[serde(rename = "WATCH")]
    Watch,
    #[serde(rename = "NEUTRAL")]
    Neutral,
    #[serde(rename = "EXIT/AVOID")]
    ExitAvoid,
}

impl TradeSignal {
    /// Sort priority, lower is better. Mirrors the rank table the backend
    /// sorts broadcast rows with: TRIGGER_SHORT is absent from that table
    /// and falls to its default rank, after everything else.
    pub fn rank(&self) -> u8 {
        match self {
            Self::TriggerLong => 0,
            Self::Watch => 1,
            Self::Neutral => 2,
            Self::ExitAvoid => 3,
            Self::TriggerShort => 9,
        }
    }

    /// Short label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TriggerLong => "LONG",
            Self::TriggerShort => "SHORT",
            Self::Watch => "WATCH",
            Self::Neutral => "NEUTRAL",
            Self::ExitAvoid => "EXIT",
        }
    }

    /// CSS class suffix used by the signal badge styles.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::TriggerLong => "trigger-long",
            Self::TriggerShort => "trigger-short",
            Self::Watch => "watch",
            Self::Neutral => "neutral",
            Self::ExitAvoid => "exit-avoid",
        }
    }

    /// All signals, in rank order. Used by the filter chips.
    pub fn all() -> &'static [TradeSignal] {
        &[
            Self::TriggerLong,
            Self::Watch,
            Self::Neutral,
            Self::ExitAvoid,
            Self::TriggerShort,
        ]
    }
}

/// One symbol's relative-strength metrics against both benchmarks.
///
/// Field names follow the backend payload: `*_vs_nifty` compares against
/// the broad index, `*_vs_bank` against the banking index. `best_signal`
/// is the higher-priority of the two per-benchmark signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannerRow {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub rrs_vs_nifty: f64,
    pub rrv_vs_nifty: f64,
    pub rve_vs_nifty: f64,
    pub score_vs_nifty: f64,
    pub signal_vs_nifty: TradeSignal,
    pub rrs_vs_bank: f64,
    pub rrv_vs_bank: f64,
    pub rve_vs_bank: f64,
    pub score_vs_bank: f64,
    pub signal_vs_bank: TradeSignal,
    pub best_signal: TradeSignal,
}

impl ScannerRow {
    /// The better of the two benchmark scores.
    pub fn best_score(&self) -> f64 {
        self.score_vs_nifty.max(self.score_vs_bank)
    }

    /// The better of the two relative-volatility-expansion readings.
    pub fn best_rve(&self) -> f64 {
        self.rve_vs_nifty.max(self.rve_vs_bank)
    }

    /// The better of the two relative-strength readings.
    pub fn best_rrs(&self) -> f64 {
        self.rrs_vs_nifty.max(self.rrs_vs_bank)
    }
}

/// A full scanner snapshot for one timeframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannerSnapshot {
    pub timeframe: Timeframe,
    /// ISO-8601 timestamp the backend computed the snapshot at.
    pub ts: String,
    pub rows: Vec<ScannerRow>,
}
