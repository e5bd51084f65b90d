//! Toolkit-independent core of the directory grid.
//!
//! This crate holds everything that does not touch the browser:
//! - [`models`] - Entries, navigation frames, filters and wire shapes
//! - [`BrowseSession`] - The navigation and query state machine
//! - [`ListingTracker`] - Loading/error status of the latest listing query
//! - [`ListingService`] - The remote listing contract
//! - [`graphql`] - Request/response codec for the `listEntries` operation
//! - [`units`] - KB/byte conversions used by the size filters

pub mod error;
pub mod graphql;
mod listing;
pub mod models;
mod service;
mod session;
pub mod units;

pub use error::ListingError;
pub use listing::{ListingTracker, QueryTicket};
#[cfg(any(test, feature = "mock"))]
pub use service::mock;
pub use service::ListingService;
pub use session::{BrowseSession, SessionState};

/// Location of the root navigation frame.
pub const ROOT_PATH: &str = "/";

/// Rows per page returned by the listing service. Not user-configurable.
pub const PAGE_SIZE: u64 = 25;
