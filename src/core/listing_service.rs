//! Listing service backed by the GraphQL endpoint.

use dirgrid_core::graphql::{decode_response, encode_request};
use dirgrid_core::models::{ListingPage, ListingQuery};
use dirgrid_core::{ListingError, ListingService};

use crate::config::LISTING_ENDPOINT;
use crate::utils::post_json;

/// Sends `listEntries` queries to a GraphQL endpoint.
#[derive(Clone, Debug)]
pub struct GraphqlListingService {
    endpoint: String,
}

impl GraphqlListingService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for GraphqlListingService {
    fn default() -> Self {
        Self::new(LISTING_ENDPOINT)
    }
}

impl ListingService for GraphqlListingService {
    async fn list_entries(&self, query: &ListingQuery) -> Result<ListingPage, ListingError> {
        let body = encode_request(query)?;
        let text = post_json(&self.endpoint, &body).await?;
        decode_response(&text)
    }
}
