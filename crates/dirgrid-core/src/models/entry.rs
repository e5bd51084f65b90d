use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of a listed entry. Serialized as the GraphQL `__typename`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// All kinds, in dropdown order.
    pub const ALL: [EntryKind; 2] = [EntryKind::File, EntryKind::Directory];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Directory => "Directory",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "File" => Ok(Self::File),
            "Directory" => Ok(Self::Directory),
            other => Err(format!("unknown entry type: {other}")),
        }
    }
}

/// One file or directory returned by the listing service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique within one listing response
    #[serde(rename = "id")]
    pub identifier: String,
    /// Fully-qualified location
    pub path: String,
    /// Display name
    pub name: String,
    #[serde(rename = "__typename")]
    pub kind: EntryKind,
    /// Size in bytes (only sent for files)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl Entry {
    /// Create a directory entry whose identifier is its path.
    pub fn directory(path: &str, name: &str) -> Self {
        Self {
            identifier: path.to_string(),
            path: path.to_string(),
            name: name.to_string(),
            kind: EntryKind::Directory,
            size: None,
        }
    }

    /// Create a file entry whose identifier is its path.
    pub fn file(path: &str, name: &str, size: u64) -> Self {
        Self {
            identifier: path.to_string(),
            path: path.to_string(),
            name: name.to_string(),
            kind: EntryKind::File,
            size: Some(size),
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Size in bytes. Always `None` for directories, whatever the service sent.
    pub fn file_size(&self) -> Option<u64> {
        match self.kind {
            EntryKind::File => self.size,
            EntryKind::Directory => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_parse() {
        assert_eq!("File".parse::<EntryKind>(), Ok(EntryKind::File));
        assert_eq!("Directory".parse::<EntryKind>(), Ok(EntryKind::Directory));
        assert!("UP_DIR".parse::<EntryKind>().is_err());
    }

    #[test]
    fn test_directory_size_ignored() {
        let mut dir = Entry::directory("/docs", "docs");
        dir.size = Some(4096);
        assert_eq!(dir.file_size(), None);
        assert_eq!(Entry::file("/a.txt", "a.txt", 10).file_size(), Some(10));
    }

    #[test]
    fn test_entry_wire_shape() {
        let json = r#"{"__typename":"Directory","id":"d1","path":"/docs","name":"docs"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.identifier, "d1");
        assert_eq!(entry.kind, EntryKind::Directory);
        assert_eq!(entry.size, None);

        let file = Entry::file("/a.txt", "a.txt", 2048);
        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["__typename"], "File");
        assert_eq!(value["size"], 2048);
    }
}
