//! GraphQL codec for the `listEntries` operation.
//!
//! The listing API speaks GraphQL over HTTP POST. Requests carry the query
//! document plus a [`ListingQuery`] as variables; responses carry either
//! `data.listEntries` or an `errors` array.

use serde::{Deserialize, Serialize};

use crate::error::ListingError;
use crate::models::{ListingPage, ListingQuery};

/// Operation name sent alongside the document.
pub const OPERATION_NAME: &str = "ListEntries";

/// Query document for one page of a directory listing.
pub const LIST_ENTRIES_QUERY: &str = "\
query ListEntries($path: String!, $page: Int!, $where: ListEntriesWhere) {
  listEntries(path: $path, page: $page, where: $where) {
    entries {
      __typename
      id
      path
      name
      ... on File {
        size
      }
    }
    pagination {
      pageCount
      totalRows
    }
  }
}";

#[derive(Serialize)]
struct Request<'a> {
    #[serde(rename = "operationName")]
    operation_name: &'static str,
    query: &'static str,
    variables: &'a ListingQuery,
}

#[derive(Deserialize)]
struct Response {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<ResponseError>,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "listEntries")]
    list_entries: Option<ListingPage>,
}

#[derive(Deserialize)]
struct ResponseError {
    message: String,
}

/// Serialize the POST body for `query`.
pub fn encode_request(query: &ListingQuery) -> Result<String, ListingError> {
    let request = Request {
        operation_name: OPERATION_NAME,
        query: LIST_ENTRIES_QUERY,
        variables: query,
    };
    Ok(serde_json::to_string(&request)?)
}

/// Parse a response body.
///
/// GraphQL `errors` take precedence over any partial data.
pub fn decode_response(body: &str) -> Result<ListingPage, ListingError> {
    let response: Response = serde_json::from_str(body)?;
    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(ListingError::Query(messages.join("; ")));
    }
    response
        .data
        .and_then(|d| d.list_entries)
        .ok_or(ListingError::MissingData)
}
