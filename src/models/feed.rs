//! Live feed connection state.

/// State of the live data feed as shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedStatus {
    /// Initial load or socket handshake in progress.
    #[default]
    Connecting,
    /// WebSocket connected, snapshots arrive as the backend pushes them.
    Live,
    /// Socket down, falling back to periodic REST polling.
    Polling,
    /// Neither socket nor REST reachable.
    Offline,
}

impl FeedStatus {
    /// Display label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Connecting => "connecting",
            Self::Live => "live",
            Self::Polling => "polling",
            Self::Offline => "offline",
        }
    }

    /// CSS class suffix for the status dot.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Connecting => "connecting",
            Self::Live => "live",
            Self::Polling => "polling",
            Self::Offline => "offline",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_connecting() {
        assert_eq!(FeedStatus::default(), FeedStatus::Connecting);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FeedStatus::Live.label(), "live");
        assert_eq!(FeedStatus::Offline.css_class(), "offline");
    }
}
