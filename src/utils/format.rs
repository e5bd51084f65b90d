//! Formatting utilities for grid cells, status text and the pager label.

use dirgrid_core::models::{DisplayRow, EntryKind};
use dirgrid_core::units::bytes_to_kb;

use crate::config::EMPTY_CELL;

/// Format a byte count as KB (e.g., "1.5 KB").
pub fn format_kb(bytes: u64) -> String {
    format!("{} KB", bytes_to_kb(bytes as f64))
}

/// Text for the path column. The up-row has no label.
pub fn path_cell(row: &DisplayRow) -> String {
    match row {
        DisplayRow::UpDir { .. } => String::new(),
        DisplayRow::Entry(entry) => entry.path.clone(),
    }
}

pub fn name_cell(row: &DisplayRow) -> String {
    match row {
        DisplayRow::UpDir { .. } => EMPTY_CELL.to_string(),
        DisplayRow::Entry(entry) => entry.name.clone(),
    }
}

pub fn type_cell(row: &DisplayRow) -> String {
    match row {
        DisplayRow::UpDir { .. } => EMPTY_CELL.to_string(),
        DisplayRow::Entry(entry) => entry.kind.to_string(),
    }
}

/// Size column: KB for files, placeholder otherwise.
pub fn size_cell(row: &DisplayRow) -> String {
    match row {
        DisplayRow::Entry(entry) if entry.kind == EntryKind::File => entry
            .file_size()
            .map(format_kb)
            .unwrap_or_else(|| EMPTY_CELL.to_string()),
        _ => EMPTY_CELL.to_string(),
    }
}

/// Pager label (e.g., "26–50 of 53").
pub fn page_label((from, to): (u64, u64), row_count: u64) -> String {
    format!("{}–{} of {}", from, to, row_count)
}

/// Error line shown under the table.
pub fn error_message(message: &str) -> String {
    format!("Error loading the table! {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirgrid_core::models::{Entry, NavigationFrame};

    #[test]
    fn test_format_kb() {
        assert_eq!(format_kb(1024), "1 KB");
        assert_eq!(format_kb(1536), "1.5 KB");
        assert_eq!(format_kb(1000), "0.98 KB");
        assert_eq!(format_kb(0), "0 KB");
    }

    #[test]
    fn test_up_dir_cells() {
        let up = DisplayRow::UpDir {
            parent: NavigationFrame::root(),
        };
        assert_eq!(path_cell(&up), "");
        assert_eq!(name_cell(&up), "_");
        assert_eq!(type_cell(&up), "_");
        assert_eq!(size_cell(&up), "_");
    }

    #[test]
    fn test_entry_cells() {
        let file = DisplayRow::Entry(Entry::file("/docs/a.md", "a.md", 2048));
        assert_eq!(path_cell(&file), "/docs/a.md");
        assert_eq!(name_cell(&file), "a.md");
        assert_eq!(type_cell(&file), "File");
        assert_eq!(size_cell(&file), "2 KB");

        let dir = DisplayRow::Entry(Entry::directory("/docs", "docs"));
        assert_eq!(type_cell(&dir), "Directory");
        assert_eq!(size_cell(&dir), "_");
    }

    #[test]
    fn test_page_label() {
        assert_eq!(page_label((26, 50), 53), "26–50 of 53");
        assert_eq!(page_label((0, 0), 0), "0–0 of 0");
    }
}
