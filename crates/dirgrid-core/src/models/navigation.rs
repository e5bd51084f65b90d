//! Navigation history frames and the rows derived from a listing.

use serde::{Deserialize, Serialize};

use super::entry::Entry;
use crate::ROOT_PATH;

/// One directory the user has entered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationFrame {
    /// Mirrors the path that was entered
    pub identifier: String,
    pub path: String,
}

impl NavigationFrame {
    /// The root frame every session starts with.
    pub fn root() -> Self {
        Self::at(ROOT_PATH)
    }

    /// Frame for a directory location.
    pub fn at(path: &str) -> Self {
        Self {
            identifier: path.to_string(),
            path: path.to_string(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.path == ROOT_PATH
    }
}

/// A row in the grid.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayRow {
    /// Synthetic "go up" row pointing at the parent frame. Never sent by the service.
    UpDir { parent: NavigationFrame },
    /// An entry from the current listing page
    Entry(Entry),
}

impl DisplayRow {
    /// Stable key for keyed rendering.
    pub fn key(&self) -> String {
        match self {
            Self::UpDir { parent } => format!("UP_DIR:{}", parent.identifier),
            Self::Entry(entry) => entry.identifier.clone(),
        }
    }

    pub fn is_up_dir(&self) -> bool {
        matches!(self, Self::UpDir { .. })
    }

    /// Whether activating the row navigates anywhere.
    pub fn is_navigable(&self) -> bool {
        match self {
            Self::UpDir { .. } => true,
            Self::Entry(entry) => entry.is_directory(),
        }
    }
}
