//! Candle timeframe type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A candle timeframe the backend computes scanner snapshots for.
///
/// Serialized as the backend's wire strings (`"5m"`, `"15m"`, `"1h"`,
/// `"1d"`), which also appear in URLs and cache keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "5m")]
    M5,
    #[serde(rename = "15m")]
    M15,
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "1d")]
    D1,
}

impl Timeframe {
    /// The wire string used in URLs and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::H1 => "1h",
            Self::D1 => "1d",
        }
    }

    /// Parse a wire string. Returns `None` for unsupported timeframes.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "5m" => Some(Self::M5),
            "15m" => Some(Self::M15),
            "1h" => Some(Self::H1),
            "1d" => Some(Self::D1),
            _ => None,
        }
    }

    /// Bar length in minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            Self::M5 => 5,
            Self::M15 => 15,
            Self::H1 => 60,
            Self::D1 => 1440,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for tf in [Timeframe::M5, Timeframe::M15, Timeframe::H1, Timeframe::D1] {
            assert_eq!(Timeframe::parse(tf.as_str()), Some(tf));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Timeframe::parse("30m"), None);
        assert_eq!(Timeframe::parse(""), None);
        assert_eq!(Timeframe::parse("5M"), None);
    }

    #[test]
    fn test_serde_uses_wire_string() {
        assert_eq!(serde_json::to_string(&Timeframe::M15).unwrap(), "\"15m\"");
        let tf: Timeframe = serde_json::from_str("\"1h\"").unwrap();
        assert_eq!(tf, Timeframe::H1);
    }

    #[test]
    fn test_minutes() {
        assert_eq!(Timeframe::M5.minutes(), 5);
        assert_eq!(Timeframe::D1.minutes(), 1440);
    }
}
