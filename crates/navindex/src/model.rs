//! Navigation tree types serialized into `navigation.json`.

use serde::{Deserialize, Serialize};

/// Root of the generated navigation artifact.
///
/// `documents` is written under the `posts` key read by the site front-end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    #[serde(rename = "posts")]
    pub documents: Vec<Entry>,
}

impl Index {
    /// Returns the number of documents reachable from the index root.
    pub fn document_count(&self) -> usize {
        count_documents(&self.documents)
    }
}

/// One node of the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Original file-system basename.
    pub name: String,
    /// Forward-slash path from the index root.
    pub path: String,
    #[serde(flatten)]
    pub kind: EntryKind,
}

/// Folder or document payload, tagged by `type` in JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryKind {
    Folder {
        children: Vec<Entry>,
    },
    #[serde(rename = "file")]
    Document {
        title: String,
        hidden: bool,
    },
}

impl Entry {
    pub fn folder(name: String, path: String, children: Vec<Entry>) -> Self {
        Self {
            name,
            path,
            kind: EntryKind::Folder { children },
        }
    }

    pub fn document(name: String, path: String, title: String, hidden: bool) -> Self {
        Self {
            name,
            path,
            kind: EntryKind::Document { title, hidden },
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self.kind, EntryKind::Document { .. })
    }

    /// Returns folder children, or an empty slice for documents.
    pub fn children(&self) -> &[Entry] {
        match &self.kind {
            EntryKind::Folder { children } => children,
            EntryKind::Document { .. } => &[],
        }
    }
}

/// Counts document entries recursively; folders themselves are not counted.
pub fn count_documents(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|entry| match &entry.kind {
            EntryKind::Document { .. } => 1,
            EntryKind::Folder { children } => count_documents(children),
        })
        .sum()
}
