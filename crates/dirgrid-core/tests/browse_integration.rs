//! End-to-end browsing against the in-memory listing service.

use dirgrid_core::mock::MockListingService;
use dirgrid_core::models::{DisplayRow, Entry, EntryKind, FilterKind, FilterValue, NavigationFrame};
use dirgrid_core::{BrowseSession, ListingError, ListingService, ListingTracker};

fn service() -> MockListingService {
    let mut docs: Vec<Entry> = (0..50)
        .map(|i| Entry::file(&format!("/docs/n{i:02}.md"), &format!("n{i:02}.md"), i * 1024))
        .collect();
    docs.insert(0, Entry::directory("/docs/api", "api"));

    MockListingService::new()
        .with_dir(
            "/",
            vec![
                Entry::directory("/docs", "docs"),
                Entry::file("/readme.md", "readme.md", 512),
            ],
        )
        .with_dir("/docs", docs)
        .with_dir("/docs/api", vec![])
}

/// Issue the session's current query and record the outcome.
async fn refresh(service: &MockListingService, session: &BrowseSession, tracker: &mut ListingTracker) {
    let query = session.current_query();
    let ticket = tracker.begin(query.clone());
    let outcome = service.list_entries(&query).await;
    assert!(tracker.finish(ticket, outcome));
}

#[tokio::test]
async fn test_browse_into_directory_and_back() {
    let service = service();
    let mut session = BrowseSession::new();
    let mut tracker = ListingTracker::new();

    refresh(&service, &session, &mut tracker).await;
    let rows = session.derive_rows(tracker.page());
    assert_eq!(rows.len(), 2);
    assert_eq!(session.derive_row_count(tracker.page()), 2);

    // Activate the "docs" row.
    assert!(session.activate_row(&rows[0]));
    refresh(&service, &session, &mut tracker).await;
    let rows = session.derive_rows(tracker.page());
    assert_eq!(
        rows[0],
        DisplayRow::UpDir {
            parent: NavigationFrame::root()
        }
    );
    assert_eq!(rows.len(), 26);
    // 51 entries over 3 pages, plus the page count for the up-row.
    assert_eq!(session.derive_row_count(tracker.page()), 54);

    session.set_page(3);
    refresh(&service, &session, &mut tracker).await;
    assert_eq!(session.derive_rows(tracker.page()).len(), 2);

    // Empty subdirectory still offers the way back up.
    assert!(session.activate_row(&rows[1]));
    refresh(&service, &session, &mut tracker).await;
    assert_eq!(
        session.derive_rows(tracker.page()),
        vec![DisplayRow::UpDir {
            parent: NavigationFrame::at("/docs")
        }]
    );

    let up = session.derive_rows(tracker.page())[0].clone();
    assert!(session.activate_row(&up));
    assert!(session.go_up());
    assert!(!session.go_up());
    assert_eq!(session.page(), 1);

    let paths: Vec<_> = service.calls().into_iter().map(|q| q.path).collect();
    assert_eq!(paths, vec!["/", "/docs", "/docs", "/docs/api"]);
}

#[tokio::test]
async fn test_filters_reach_the_service() {
    let service = service();
    let mut session = BrowseSession::new();
    let mut tracker = ListingTracker::new();

    session.enter_directory(&Entry::directory("/docs", "docs"));
    session.set_page(2);
    session.add_filter(FilterKind::SizeGreaterThan);
    session.set_size_filter_input(FilterKind::SizeGreaterThan, "40");
    session.add_filter(FilterKind::TypeEquals);
    session.set_filter_value(FilterValue::TypeEquals(Some(EntryKind::File)));
    assert_eq!(session.page(), 1);

    refresh(&service, &session, &mut tracker).await;
    let sent = service.calls().pop().unwrap();
    assert_eq!(sent.constraints.size_gt, Some(40960.0));
    assert_eq!(sent.constraints.type_eq, Some(EntryKind::File));
    assert_eq!(sent.constraints.size_lt, None);

    let names: Vec<_> = tracker
        .page()
        .unwrap()
        .entries
        .iter()
        .map(|e| e.name.clone())
        .collect();
    assert_eq!(names.first().map(String::as_str), Some("n41.md"));
    assert_eq!(names.len(), 9);

    session.remove_filter(FilterKind::SizeGreaterThan);
    session.set_name_search("n4");
    refresh(&service, &session, &mut tracker).await;
    assert_eq!(tracker.page().unwrap().pagination.total_rows, 10);
}

#[tokio::test]
async fn test_failure_keeps_place() {
    let service = service();
    let mut session = BrowseSession::new();
    let mut tracker = ListingTracker::new();

    session.enter_directory(&Entry::directory("/docs", "docs"));
    refresh(&service, &session, &mut tracker).await;

    session.set_page(2);
    service.fail_next(ListingError::Timeout);
    refresh(&service, &session, &mut tracker).await;
    assert_eq!(tracker.error(), Some(&ListingError::Timeout));
    // Stale page 1 rows remain, navigation state is untouched.
    assert_eq!(session.derive_rows(tracker.page()).len(), 26);
    assert_eq!(session.current_path(), "/docs");
    assert_eq!(session.page(), 2);

    refresh(&service, &session, &mut tracker).await;
    assert_eq!(tracker.error(), None);
    assert_eq!(tracker.page().unwrap().entries[0].name, "n24.md");
}

#[tokio::test]
async fn test_empty_directory_leads_back_up() {
    let service = service();
    let mut session = BrowseSession::new();
    let mut tracker = ListingTracker::new();

    session.enter_directory(&Entry::directory("/docs", "docs"));
    session.enter_directory(&Entry::directory("/docs/api", "api"));
    refresh(&service, &session, &mut tracker).await;

    assert_eq!(session.derive_row_count(tracker.page()), 0);
    assert!(session.has_visible_rows(tracker.page()));
    let rows = session.derive_rows(tracker.page());
    assert_eq!(
        rows,
        vec![DisplayRow::UpDir {
            parent: NavigationFrame::at("/docs")
        }]
    );

    assert!(session.activate_row(&rows[0]));
    assert_eq!(session.current_path(), "/docs");
}
