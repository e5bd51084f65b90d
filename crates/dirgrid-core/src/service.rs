//! The remote listing contract.

use crate::error::ListingError;
use crate::models::{ListingPage, ListingQuery};

/// Source of directory listings.
///
/// Implementations run on a single-threaded executor (the browser event
/// loop), so the returned future is not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait ListingService {
    /// Fetch one page of `query.path`, filtered by `query.constraints`.
    async fn list_entries(&self, query: &ListingQuery) -> Result<ListingPage, ListingError>;
}

/// In-memory listing service for tests and offline development.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    use super::ListingService;
    use crate::error::ListingError;
    use crate::models::{Entry, EntryKind, ListingPage, ListingQuery, Pagination, WhereClause};
    use crate::PAGE_SIZE;

    /// Serves listings from a fixed directory map.
    #[derive(Debug, Default)]
    pub struct MockListingService {
        dirs: BTreeMap<String, Vec<Entry>>,
        calls: RefCell<Vec<ListingQuery>>,
        fail_next: RefCell<Option<ListingError>>,
    }

    impl MockListingService {
        pub fn new() -> Self {
            Self::default()
        }

        /// Register the children of `path`, in the order they should be served.
        pub fn with_dir(mut self, path: &str, entries: Vec<Entry>) -> Self {
            self.dirs.insert(path.to_string(), entries);
            self
        }

        /// Make the next call fail with `err`.
        pub fn fail_next(&self, err: ListingError) {
            *self.fail_next.borrow_mut() = Some(err);
        }

        /// Every query received so far.
        pub fn calls(&self) -> Vec<ListingQuery> {
            self.calls.borrow().clone()
        }

        fn matches(entry: &Entry, filter: &WhereClause) -> bool {
            let size = entry.file_size().map(|s| s as f64);
            if let Some(min) = filter.size_gt
                && size.is_none_or(|s| s <= min)
            {
                return false;
            }
            if let Some(max) = filter.size_lt
                && size.is_none_or(|s| s >= max)
            {
                return false;
            }
            if let Some(kind) = filter.type_eq
                && entry.kind != kind
            {
                return false;
            }
            if let Some(needle) = &filter.name_contains
                && !entry.name.contains(needle.as_str())
            {
                return false;
            }
            true
        }
    }

    impl ListingService for MockListingService {
        async fn list_entries(&self, query: &ListingQuery) -> Result<ListingPage, ListingError> {
            self.calls.borrow_mut().push(query.clone());
            if let Some(err) = self.fail_next.borrow_mut().take() {
                return Err(err);
            }
            let Some(children) = self.dirs.get(&query.path) else {
                return Err(ListingError::Query(format!(
                    "no such directory: {}",
                    query.path
                )));
            };

            let matching: Vec<&Entry> = children
                .iter()
                .filter(|e| Self::matches(e, &query.constraints))
                .collect();
            let total_rows = matching.len() as u64;
            let skip = u64::from(query.page.saturating_sub(1)) * PAGE_SIZE;
            let entries = matching
                .into_iter()
                .skip(skip as usize)
                .take(PAGE_SIZE as usize)
                .cloned()
                .collect();

            Ok(ListingPage {
                entries,
                pagination: Pagination {
                    page_count: total_rows.div_ceil(PAGE_SIZE),
                    total_rows,
                },
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn service() -> MockListingService {
            let mut root: Vec<Entry> = (0..30)
                .map(|i| Entry::file(&format!("/f{i:02}.txt"), &format!("f{i:02}.txt"), i * 1024))
                .collect();
            root.push(Entry::directory("/docs", "docs"));
            MockListingService::new().with_dir("/", root)
        }

        fn query(page: u32, constraints: WhereClause) -> ListingQuery {
            ListingQuery {
                path: "/".to_string(),
                page,
                constraints,
            }
        }

        #[tokio::test]
        async fn test_pagination() {
            let service = service();
            let first = service
                .list_entries(&query(1, WhereClause::default()))
                .await
                .unwrap();
            assert_eq!(first.entries.len(), 25);
            assert_eq!(first.pagination.page_count, 2);
            assert_eq!(first.pagination.total_rows, 31);

            let second = service
                .list_entries(&query(2, WhereClause::default()))
                .await
                .unwrap();
            assert_eq!(second.entries.len(), 6);
            assert_eq!(second.entries[5].name, "docs");
        }

        #[tokio::test]
        async fn test_filters() {
            let service = service();
            let page = service
                .list_entries(&query(
                    1,
                    WhereClause {
                        size_gt: Some(10240.0),
                        size_lt: Some(13312.0),
                        ..Default::default()
                    },
                ))
                .await
                .unwrap();
            let names: Vec<_> = page.entries.iter().map(|e| e.name.as_str()).collect();
            assert_eq!(names, vec!["f11.txt", "f12.txt"]);

            let dirs = service
                .list_entries(&query(
                    1,
                    WhereClause {
                        type_eq: Some(EntryKind::Directory),
                        ..Default::default()
                    },
                ))
                .await
                .unwrap();
            assert_eq!(dirs.pagination.total_rows, 1);
        }

        #[tokio::test]
        async fn test_failures() {
            let service = service();
            service.fail_next(ListingError::Http(500));
            let err = service
                .list_entries(&query(1, WhereClause::default()))
                .await
                .unwrap_err();
            assert_eq!(err, ListingError::Http(500));
            assert!(service
                .list_entries(&query(1, WhereClause::default()))
                .await
                .is_ok());

            let missing = ListingQuery {
                path: "/nope".to_string(),
                ..query(1, WhereClause::default())
            };
            assert!(matches!(
                service.list_entries(&missing).await,
                Err(ListingError::Query(_))
            ));
            assert_eq!(service.calls().len(), 3);
        }
    }
}
