//! Navigation and query state machine.
//!
//! [`BrowseSession`] owns the breadcrumb stack, the filter predicate, the
//! page cursor and the set of filter chips on screen. Every mutation goes
//! through a named operation; the query to send and the rows to render are
//! derived from that state on demand.
//!
//! Invariants:
//! - The frame stack is never empty and starts at the root frame.
//! - Any change of location or filter resets the page to 1.

use serde::{Deserialize, Serialize};

use crate::models::{
    DisplayRow, Entry, FilterKind, FilterPredicate, FilterValue, ListingPage, ListingQuery,
    NavigationFrame,
};
use crate::units::parse_kb_input;
use crate::PAGE_SIZE;

/// Snapshot of one browsing session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Breadcrumb stack, root first
    pub frames: Vec<NavigationFrame>,
    pub predicate: FilterPredicate,
    /// 1-based
    pub page: u32,
    /// Filter chips on screen, in the order they were added
    pub active_filters: Vec<FilterKind>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            frames: vec![NavigationFrame::root()],
            predicate: FilterPredicate::default(),
            page: 1,
            active_filters: Vec::new(),
        }
    }
}

/// Controller for one browsing session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrowseSession {
    state: SessionState,
}

impl BrowseSession {
    /// Fresh session at the root with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a snapshot, repairing a missing root frame or a zero page.
    pub fn from_state(mut state: SessionState) -> Self {
        if state.frames.first().is_none_or(|f| !f.is_root()) {
            state.frames.insert(0, NavigationFrame::root());
        }
        state.page = state.page.max(1);
        Self { state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Current location (top of the stack).
    pub fn current_frame(&self) -> &NavigationFrame {
        // Invariant: the stack always holds the root frame.
        &self.state.frames[self.state.frames.len() - 1]
    }

    pub fn current_path(&self) -> &str {
        &self.current_frame().path
    }

    /// Frame that a "go up" would return to.
    pub fn parent_frame(&self) -> Option<&NavigationFrame> {
        let frames = &self.state.frames;
        frames.len().checked_sub(2).map(|i| &frames[i])
    }

    pub fn depth(&self) -> usize {
        self.state.frames.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.depth() == 1
    }

    /// Breadcrumb trail, root first.
    pub fn breadcrumbs(&self) -> &[NavigationFrame] {
        &self.state.frames
    }

    /// Push a frame for `entry`. Files are ignored; returns whether the location changed.
    pub fn enter_directory(&mut self, entry: &Entry) -> bool {
        if !entry.is_directory() {
            return false;
        }
        self.state.frames.push(NavigationFrame::at(&entry.path));
        self.state.page = 1;
        true
    }

    /// Pop back to the parent frame. No-op at the root.
    pub fn go_up(&mut self) -> bool {
        if self.is_at_root() {
            return false;
        }
        self.state.frames.pop();
        self.state.page = 1;
        true
    }

    /// Handle a click on a grid row.
    pub fn activate_row(&mut self, row: &DisplayRow) -> bool {
        match row {
            DisplayRow::UpDir { .. } => self.go_up(),
            DisplayRow::Entry(entry) => self.enter_directory(entry),
        }
    }

    // =========================================================================
    // Filters
    // =========================================================================

    pub fn predicate(&self) -> &FilterPredicate {
        &self.state.predicate
    }

    /// Set or clear one filter field.
    pub fn set_filter_value(&mut self, value: FilterValue) {
        self.state.predicate.apply(value);
        self.state.page = 1;
    }

    /// Apply raw text typed into a size chip (KB).
    pub fn set_size_filter_input(&mut self, kind: FilterKind, raw: &str) {
        let kb = parse_kb_input(raw);
        match kind {
            FilterKind::SizeGreaterThan => self.set_filter_value(FilterValue::SizeGreaterThan(kb)),
            FilterKind::SizeLessThan => self.set_filter_value(FilterValue::SizeLessThan(kb)),
            FilterKind::TypeEquals | FilterKind::NameContains => {}
        }
    }

    /// Apply the free-text search field. Empty text clears the name filter.
    pub fn set_name_search(&mut self, text: &str) {
        let text = (!text.is_empty()).then(|| text.to_string());
        self.set_filter_value(FilterValue::NameContains(text));
    }

    pub fn active_filters(&self) -> &[FilterKind] {
        &self.state.active_filters
    }

    /// Chip kinds not yet on screen, in menu order.
    pub fn available_filters(&self) -> Vec<FilterKind> {
        FilterKind::CHIPS
            .into_iter()
            .filter(|kind| !self.state.active_filters.contains(kind))
            .collect()
    }

    /// Show a chip. Already-active and non-chip kinds are ignored.
    pub fn add_filter(&mut self, kind: FilterKind) -> bool {
        if kind.chip().is_none() || self.state.active_filters.contains(&kind) {
            return false;
        }
        self.state.active_filters.push(kind);
        true
    }

    /// Remove a chip and clear its value.
    pub fn remove_filter(&mut self, kind: FilterKind) -> bool {
        let before = self.state.active_filters.len();
        self.state.active_filters.retain(|k| *k != kind);
        if self.state.active_filters.len() == before {
            return false;
        }
        self.set_filter_value(FilterValue::cleared(kind));
        true
    }

    // =========================================================================
    // Paging
    // =========================================================================

    /// 1-based page.
    pub fn page(&self) -> u32 {
        self.state.page
    }

    /// Jump to page `n`. Values below 1 are treated as 1.
    pub fn set_page(&mut self, n: u32) {
        self.state.page = n.max(1);
    }

    /// Zero-based page, as pager widgets count.
    pub fn page_index(&self) -> u32 {
        self.state.page - 1
    }

    pub fn set_page_index(&mut self, index: u32) {
        self.set_page(index.saturating_add(1));
    }

    pub fn has_previous_page(&self) -> bool {
        self.state.page > 1
    }

    /// Whether `row_count` rows extend past the current page.
    pub fn has_next_page(&self, row_count: u64) -> bool {
        u64::from(self.state.page) < row_count.div_ceil(PAGE_SIZE)
    }

    /// 1-based inclusive row range shown on the current page, `(0, 0)` when empty.
    pub fn page_window(&self, row_count: u64) -> (u64, u64) {
        if row_count == 0 {
            return (0, 0);
        }
        let page = u64::from(self.state.page);
        let from = (page - 1) * PAGE_SIZE + 1;
        let to = (page * PAGE_SIZE).min(row_count);
        (from, to)
    }

    // =========================================================================
    // Derivations
    // =========================================================================

    /// Parameters for the listing service, derived from the current state.
    pub fn current_query(&self) -> ListingQuery {
        ListingQuery {
            path: self.current_path().to_string(),
            page: self.state.page,
            constraints: self.state.predicate.to_where_clause(),
        }
    }

    /// Rows to render for `result`, with an up-row first when below the root.
    pub fn derive_rows(&self, result: Option<&ListingPage>) -> Vec<DisplayRow> {
        let up = self
            .parent_frame()
            .map(|parent| DisplayRow::UpDir {
                parent: parent.clone(),
            });
        let entries = result
            .into_iter()
            .flat_map(|page| page.entries.iter().cloned())
            .map(DisplayRow::Entry);
        up.into_iter().chain(entries).collect()
    }

    /// Row count handed to the pager.
    ///
    /// Below the root this adds the service's page count, not 1, for the
    /// up-row. Kept as observed; see DESIGN.md.
    pub fn derive_row_count(&self, result: Option<&ListingPage>) -> u64 {
        let pagination = result.map(|page| page.pagination).unwrap_or_default();
        if self.is_at_root() {
            pagination.total_rows
        } else {
            pagination.total_rows.saturating_add(pagination.page_count)
        }
    }

    /// Whether the table has anything to render for `result`.
    ///
    /// Below the root the up-row is always shown, even for an empty directory.
    pub fn has_visible_rows(&self, result: Option<&ListingPage>) -> bool {
        !self.is_at_root() || self.derive_row_count(result) > 0
    }
}
