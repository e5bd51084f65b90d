//! Status of the most recent listing query.
//!
//! Queries may overlap (rapid paging, typing in the search field). Each
//! issued query gets a [`QueryTicket`]; only the newest ticket may update
//! the tracker, so a slow response can never overwrite a newer one.

use crate::error::ListingError;
use crate::models::{ListingPage, ListingQuery};

/// Handle for one issued query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryTicket(u64);

/// Loading/error state plus the last page that loaded successfully.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingTracker {
    issued: u64,
    in_flight: Option<ListingQuery>,
    page: Option<ListingPage>,
    error: Option<ListingError>,
}

impl ListingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `query` was sent. Supersedes any query still in flight.
    pub fn begin(&mut self, query: ListingQuery) -> QueryTicket {
        self.issued += 1;
        self.in_flight = Some(query);
        QueryTicket(self.issued)
    }

    /// Apply the outcome of `ticket`.
    ///
    /// Returns `false` and changes nothing if a newer query has been issued
    /// since. A failure keeps the previous page so stale rows stay visible.
    pub fn finish(
        &mut self,
        ticket: QueryTicket,
        outcome: Result<ListingPage, ListingError>,
    ) -> bool {
        if ticket.0 != self.issued || self.in_flight.is_none() {
            return false;
        }
        self.in_flight = None;
        match outcome {
            Ok(page) => {
                self.page = Some(page);
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Last page that loaded successfully.
    pub fn page(&self) -> Option<&ListingPage> {
        self.page.as_ref()
    }

    pub fn error(&self) -> Option<&ListingError> {
        self.error.as_ref()
    }
}
