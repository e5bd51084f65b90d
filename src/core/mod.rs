//! Browser-side plumbing around the core controller.
//!
//! This module provides:
//! - [`GraphqlListingService`] - Listing service over GraphQL/HTTP
//! - [`error`] - Fetch errors and their mapping to listing errors

pub mod error;
mod listing_service;

pub use listing_service::GraphqlListingService;
