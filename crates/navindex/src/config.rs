//! Immutable configuration shared by the scanner and the index builder.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Directory, relative to the base directory, that holds navigable content.
pub const CONTENT_DIR: &str = "posts";
/// File name of the generated navigation index.
pub const OUTPUT_FILE: &str = "navigation.json";
/// Extension that marks a regular file as a navigable document.
pub const DOCUMENT_EXTENSION: &str = ".html";

/// Basenames that never appear in the navigation tree.
pub const IGNORED_NAMES: [&str; 7] = [
    ".",
    "..",
    "manifest.json",
    "search_index.json",
    "index.html",
    ".DS_Store",
    ".gitignore",
];

/// Document basenames kept in the index but flagged as hidden from
/// rendered navigation.
pub const HIDDEN_NAMES: [&str; 4] = ["privacy.html", "tos.html", "contact.html", "donate.html"];

/// Settings for one navigation build.
///
/// Built once at startup and passed by reference into
/// [`TreeScanner`](crate::scanner::TreeScanner) and
/// [`IndexBuilder`](crate::builder::IndexBuilder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavConfig {
    /// Root directory scanned for documents.
    pub content_root: PathBuf,
    /// Destination of the serialized index.
    pub output_path: PathBuf,
    /// Leading path segment for top-level entries. Empty means entries
    /// start directly with their own name.
    pub path_prefix: String,
    /// Basenames skipped during traversal.
    pub ignored_names: BTreeSet<String>,
    /// Document basenames flagged with `hidden = true`.
    pub hidden_names: BTreeSet<String>,
    /// Suffix a file name must end with to count as a document.
    pub document_extension: String,
}

impl NavConfig {
    /// Returns the default configuration rooted at `base_dir`: content under
    /// `base_dir/posts`, output at `base_dir/navigation.json`.
    pub fn for_base_dir(base_dir: &Path) -> Self {
        Self {
            content_root: base_dir.join(CONTENT_DIR),
            output_path: base_dir.join(OUTPUT_FILE),
            path_prefix: CONTENT_DIR.to_string(),
            ignored_names: IGNORED_NAMES.iter().map(ToString::to_string).collect(),
            hidden_names: HIDDEN_NAMES.iter().map(ToString::to_string).collect(),
            document_extension: DOCUMENT_EXTENSION.to_string(),
        }
    }

    /// Returns whether `name` is in the ignored set.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_names.contains(name)
    }

    /// Returns whether `name` is in the hidden-from-navigation set.
    pub fn is_hidden(&self, name: &str) -> bool {
        self.hidden_names.contains(name)
    }

    /// Returns whether `name` carries the document extension.
    pub fn is_document(&self, name: &str) -> bool {
        name.ends_with(&self.document_extension)
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::for_base_dir(Path::new("."))
    }
}
