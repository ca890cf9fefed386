//! Benchmark regime payloads served over `GET /benchmarks`.

use serde::{Deserialize, Serialize};

use super::Timeframe;

/// Market regime classification for a benchmark index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    #[serde(rename = "BULLISH")]
    Bullish,
    #[serde(rename = "BEARISH")]
    Bearish,
    #[serde(rename = "NEUTRAL")]
    Neutral,
}

impl Regime {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bullish => "BULLISH",
            Self::Bearish => "BEARISH",
            Self::Neutral => "NEUTRAL",
        }
    }

    /// CSS class suffix used by the regime styles.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
        }
    }
}

/// Regime state of one benchmark index at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkState {
    /// Benchmark symbol (e.g. `NIFTY`, `BANKNIFTY`).
    pub benchmark: String,
    pub timeframe: Timeframe,
    pub ts: String,
    pub regime: Regime,
    pub trend: f64,
    pub vol_expansion: f64,
    pub participation: f64,
}

/// Benchmark states for one timeframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarksSnapshot {
    pub timeframe: Timeframe,
    pub ts: String,
    pub states: Vec<BenchmarkState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_backend_payload() {
        let json = r#"{
            "timeframe": "15m",
            "ts": "2026-08-28T09:45:00+00:00",
            "states": [
                {
                    "benchmark": "NIFTY",
                    "timeframe": "15m",
                    "ts": "2026-08-28T09:45:00+00:00",
                    "regime": "BULLISH",
                    "trend": 0.42,
                    "vol_expansion": 1.08,
                    "participation": 0.63
                },
                {
                    "benchmark": "BANKNIFTY",
                    "timeframe": "15m",
                    "ts": "2026-08-28T09:45:00+00:00",
                    "regime": "NEUTRAL",
                    "trend": -0.05,
                    "vol_expansion": 0.97,
                    "participation": 0.48
                }
            ]
        }"#;

        let snap: BenchmarksSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.timeframe, Timeframe::M15);
        assert_eq!(snap.states.len(), 2);
        assert_eq!(snap.states[0].regime, Regime::Bullish);
        assert_eq!(snap.states[1].benchmark, "BANKNIFTY");
    }

    #[test]
    fn test_regime_classes() {
        assert_eq!(Regime::Bullish.css_class(), "bullish");
        assert_eq!(Regime::Bearish.label(), "BEARISH");
    }
}
