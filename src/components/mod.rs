//! UI components built with Leptos.
//!
//! - [`grid`] - The paginated, filterable directory grid
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod grid;
pub mod icons;

pub use grid::DataGrid;
