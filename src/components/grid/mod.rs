//! Directory grid components.
//!
//! Components:
//! - [`DataGrid`] - Toolbar, table, status line and pager
//! - `Toolbar` - Search field, filter chips and the filter menu
//! - `Chip` - One removable filter with its input
//! - `GridTable` - Rows for the current page
//! - `StatusLine` - Empty, loading and error messages
//! - `Pager` - Page range label and previous/next buttons

mod chip;
mod data_grid;
mod pager;
mod status;
mod table;
mod toolbar;

pub use data_grid::DataGrid;
