//! Root application module.
//!
//! Contains the main App component, the AppContext definition and
//! GridState, the reactive wrapper around the browse session.

use leptos::prelude::*;
use leptos::task::spawn_local;

use dirgrid_core::models::{DisplayRow, FilterKind, FilterValue, ListingQuery};
use dirgrid_core::{BrowseSession, ListingService, ListingTracker};

use crate::components::DataGrid;
use crate::core::GraphqlListingService;
use crate::utils::log;

// ============================================================================
// GridState
// ============================================================================

/// Grid state managed with Leptos signals.
///
/// [`BrowseSession`] holds navigation, filters and paging; [`ListingTracker`]
/// holds the outcome of the latest listing query. All mutation goes through
/// the methods below so every change passes through the session's rules.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct GridState {
    /// Navigation, filter and page state.
    pub session: RwSignal<BrowseSession>,
    /// Loading/error status and last loaded page.
    pub listing: RwSignal<ListingTracker>,
}

impl GridState {
    /// Creates a fresh session at the root with nothing loaded.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(BrowseSession::new()),
            listing: RwSignal::new(ListingTracker::new()),
        }
    }

    /// Query derived from the current session, memoized so that changes
    /// which do not affect the query (e.g. adding an empty chip) do not refetch.
    pub fn query(&self) -> Memo<ListingQuery> {
        let session = self.session;
        Memo::new(move |_| session.with(BrowseSession::current_query))
    }

    /// Issue `query` against `service`, keeping only the newest response.
    pub fn load<S>(&self, service: S, query: ListingQuery)
    where
        S: ListingService + 'static,
    {
        let listing = self.listing;
        let Some(ticket) = listing.try_update(|t| t.begin(query.clone())) else {
            return;
        };
        log::info(&format!("listing {} page {}", query.path, query.page));

        spawn_local(async move {
            let outcome = service.list_entries(&query).await;
            if let Err(err) = &outcome {
                log::error(&format!("listing {} failed: {}", query.path, err));
            }
            let applied = listing
                .try_update(|t| t.finish(ticket, outcome))
                .unwrap_or(false);
            if !applied {
                log::warn(&format!(
                    "dropped stale response for {} page {}",
                    query.path, query.page
                ));
            }
        });
    }

    pub fn activate_row(&self, row: &DisplayRow) {
        self.session.update(|s| {
            s.activate_row(row);
        });
    }

    pub fn add_filter(&self, kind: FilterKind) {
        self.session.update(|s| {
            s.add_filter(kind);
        });
    }

    pub fn remove_filter(&self, kind: FilterKind) {
        self.session.update(|s| {
            s.remove_filter(kind);
        });
    }

    pub fn set_filter_value(&self, value: FilterValue) {
        self.session.update(|s| s.set_filter_value(value));
    }

    pub fn set_size_input(&self, kind: FilterKind, raw: &str) {
        self.session.update(|s| s.set_size_filter_input(kind, raw));
    }

    pub fn set_name_search(&self, text: &str) {
        self.session.update(|s| s.set_name_search(text));
    }

    pub fn set_page(&self, page: u32) {
        self.session.update(|s| s.set_page(page));
    }

    /// Rows to render for the last loaded page.
    pub fn rows(&self) -> Vec<DisplayRow> {
        self.listing
            .with(|l| self.session.with(|s| s.derive_rows(l.page())))
    }

    /// Row count handed to the pager.
    pub fn row_count(&self) -> u64 {
        self.listing
            .with(|l| self.session.with(|s| s.derive_row_count(l.page())))
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component with `use_context::<AppContext>()`.
#[derive(Clone)]
pub struct AppContext {
    /// Grid state (session and listing status).
    pub grid: GridState,
    /// Listing service used for every query.
    pub service: GraphqlListingService,
}

impl AppContext {
    /// Creates a new context talking to the configured endpoint.
    pub fn new() -> Self {
        Self {
            grid: GridState::new(),
            service: GraphqlListingService::default(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Provides the AppContext, issues a listing query whenever the derived
/// query changes, and renders the grid.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx.clone());

    log::info(&format!("listing endpoint {}", ctx.service.endpoint()));

    let grid = ctx.grid;
    let service = ctx.service;
    let query = grid.query();
    Effect::new(move |_| {
        grid.load(service.clone(), query.get());
    });

    view! { <DataGrid /> }
}
