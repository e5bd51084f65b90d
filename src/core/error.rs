//! Custom error types for the application.
//!
//! - [`FetchError`] - Browser-level failures while talking to the listing endpoint
//!
//! Fetch errors are converted into [`ListingError`] at the service boundary,
//! which is the only error the grid displays.

use std::fmt;

use dirgrid_core::ListingError;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<FetchError> for ListingError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Timeout => ListingError::Timeout,
            FetchError::HttpError(status) => ListingError::Http(status),
            FetchError::NetworkError(msg) => ListingError::Transport(msg),
            FetchError::InvalidContent => ListingError::Decode(err.to_string()),
            FetchError::NoWindow
            | FetchError::RequestCreationFailed
            | FetchError::ResponseReadFailed => ListingError::Transport(err.to_string()),
        }
    }
}
