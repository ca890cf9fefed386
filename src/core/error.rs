//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`FeedError`] - WebSocket feed errors

use std::fmt;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network-level failure (DNS, refused connection, CORS)
    NetworkError(String),
    /// Non-success HTTP status returned by the backend
    HttpStatus(u16),
    /// Failed to read the response body
    BodyReadFailed,
    /// Response body was not the expected JSON shape
    JsonParseError(String),
    /// Request exceeded the configured timeout
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create HTTP request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpStatus(code) => write!(f, "Backend returned HTTP {}", code),
            Self::BodyReadFailed => write!(f, "Failed to read response body"),
            Self::JsonParseError(msg) => write!(f, "Failed to parse response JSON: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// WebSocket feed errors.
#[derive(Debug, Clone)]
pub enum FeedError {
    /// Failed to open the WebSocket
    SocketCreationFailed(String),
    /// Push payload was not a valid scanner snapshot
    BadPayload(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SocketCreationFailed(msg) => write!(f, "Failed to open WebSocket: {}", msg),
            Self::BadPayload(msg) => write!(f, "Bad scanner push payload: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::HttpStatus(404).to_string(),
            "Backend returned HTTP 404"
        );
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn test_feed_error_display() {
        let err = FeedError::BadPayload("missing field `rows`".to_string());
        assert!(err.to_string().contains("missing field"));
    }
}
