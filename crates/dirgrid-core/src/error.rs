//! Listing service failures.
//!
//! This is the only error class the grid knows about. The session never
//! produces one; it is surfaced by the service and shown to the user as-is.

use thiserror::Error;

/// A failed `listEntries` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// The request never produced a response (network, CORS, ...).
    #[error("network error: {0}")]
    Transport(String),
    /// The request did not complete within the fetch timeout.
    #[error("request timed out")]
    Timeout,
    /// Non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// The response body was not valid JSON of the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The server answered with GraphQL `errors`.
    #[error("{0}")]
    Query(String),
    /// The response carried neither data nor errors.
    #[error("response contained no listing")]
    MissingData,
}

impl From<serde_json::Error> for ListingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
