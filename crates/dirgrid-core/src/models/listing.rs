//! Listing service request and response shapes.

use serde::{Deserialize, Serialize, Serializer};

use super::entry::{Entry, EntryKind};

/// Parameters for one `listEntries` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Directory to list
    pub path: String,
    /// 1-based page number
    pub page: u32,
    #[serde(rename = "where")]
    pub constraints: WhereClause,
}

/// Service-side filter. Absent fields are omitted from the JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WhereClause {
    /// Bytes
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_bytes"
    )]
    pub size_gt: Option<f64>,
    /// Bytes
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_bytes"
    )]
    pub size_lt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_eq: Option<EntryKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Whole byte counts go out as JSON integers so `Int` arguments accept them.
fn serialize_bytes<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match *value {
        Some(bytes) if bytes.fract() == 0.0 && bytes.abs() < i64::MAX as f64 => {
            serializer.serialize_i64(bytes as i64)
        }
        Some(bytes) => serializer.serialize_f64(bytes),
        None => serializer.serialize_none(),
    }
}

/// One page of a directory listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    /// Entries in service order
    pub entries: Vec<Entry>,
    pub pagination: Pagination,
}

/// Pagination metadata reported by the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_count: u64,
    pub total_rows: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_where_clause_serializes_empty() {
        let query = ListingQuery {
            path: "/".to_string(),
            page: 1,
            constraints: WhereClause::default(),
        };
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"path":"/","page":1,"where":{}}"#);
    }

    #[test]
    fn test_where_clause_fields() {
        let clause = WhereClause {
            size_gt: Some(10240.0),
            size_lt: Some(1.02),
            type_eq: Some(EntryKind::Directory),
            name_contains: Some("rep".to_string()),
        };
        let json = serde_json::to_string(&clause).unwrap();
        assert_eq!(
            json,
            r#"{"size_gt":10240,"size_lt":1.02,"type_eq":"Directory","name_contains":"rep"}"#
        );
    }

    #[test]
    fn test_pagination_camel_case() {
        let page: ListingPage =
            serde_json::from_str(r#"{"entries":[],"pagination":{"pageCount":3,"totalRows":50}}"#)
                .unwrap();
        assert_eq!(
            page.pagination,
            Pagination {
                page_count: 3,
                total_rows: 50
            }
        );
    }
}
