//! Data models for the directory grid.
//!
//! Contains domain types for:
//! - [`Entry`], [`EntryKind`] - Items returned by the listing service
//! - [`NavigationFrame`], [`DisplayRow`] - Browsing history and rendered rows
//! - [`FilterPredicate`], [`FilterKind`], [`FilterValue`], [`FilterChip`] - Query constraints
//! - [`ListingQuery`], [`WhereClause`], [`ListingPage`], [`Pagination`] - Wire shapes

mod entry;
mod filter;
mod listing;
mod navigation;

pub use entry::{Entry, EntryKind};
pub use filter::{ChipInput, FilterChip, FilterKind, FilterPredicate, FilterValue};
pub use listing::{ListingPage, ListingQuery, Pagination, WhereClause};
pub use navigation::{DisplayRow, NavigationFrame};
