//! Recursive content-tree scanner producing navigation entries.

use std::path::Path;

use tracing::error;

use crate::config::NavConfig;
use crate::fs::{FileSystem, NodeKind};
use crate::model::Entry;
use crate::title::extract_title;

/// Walks a content directory depth-first and builds sorted [`Entry`] trees.
///
/// Every fault below the root (unreadable directory, failed stat, unreadable
/// document) is logged and the affected subtree or entry is omitted; nothing
/// escapes [`TreeScanner::scan`].
pub struct TreeScanner<'a> {
    config: &'a NavConfig,
    fs: &'a dyn FileSystem,
}

impl<'a> TreeScanner<'a> {
    pub fn new(config: &'a NavConfig, fs: &'a dyn FileSystem) -> Self {
        Self { config, fs }
    }

    /// Scans `directory_path`, labeling entries with paths below
    /// `relative_path`.
    ///
    /// Returns an empty list when the directory is missing or cannot be
    /// listed.
    pub fn scan(&self, directory_path: &Path, relative_path: &str) -> Vec<Entry> {
        if !self.fs.exists(directory_path) {
            return Vec::new();
        }

        let mut names = match self.fs.list_dir(directory_path) {
            Ok(names) => names,
            Err(err) => {
                error!(
                    "Error reading directory {}: {}",
                    directory_path.display(),
                    err
                );
                return Vec::new();
            }
        };
        names.sort();

        let mut entries = Vec::new();
        for name in names {
            if self.should_skip(&name) {
                continue;
            }

            if let Some(entry) = self.scan_entry(directory_path, relative_path, name) {
                entries.push(entry);
            }
        }

        entries
    }

    fn should_skip(&self, name: &str) -> bool {
        self.config.is_ignored(name) || name.starts_with('.') || name.contains("..")
    }

    fn scan_entry(
        &self,
        directory_path: &Path,
        relative_path: &str,
        name: String,
    ) -> Option<Entry> {
        let full_path = directory_path.join(&name);
        let entry_path = join_relative(relative_path, &name);

        let kind = match self.fs.node_kind(&full_path) {
            Ok(kind) => kind,
            Err(err) => {
                error!("Error checking {}: {}", full_path.display(), err);
                return None;
            }
        };

        match kind {
            NodeKind::Directory => {
                let children = self.scan(&full_path, &entry_path);

                Some(Entry::folder(name, entry_path, children))
            }
            NodeKind::File if self.config.is_document(&name) => {
                let content = match self.fs.read_text(&full_path) {
                    Ok(content) => content,
                    Err(err) => {
                        error!("Error reading {}: {}", full_path.display(), err);
                        return None;
                    }
                };
                let title = extract_title(&content, &name);
                let hidden = self.config.is_hidden(&name);

                Some(Entry::document(name, entry_path, title, hidden))
            }
            NodeKind::File | NodeKind::Symlink | NodeKind::Other => None,
        }
    }
}

/// Appends `name` to a relative path, normalizing every backslash in the
/// joined result to `/`.
fn join_relative(relative_path: &str, name: &str) -> String {
    let parent = relative_path.trim_end_matches(['/', '\\']);
    let joined = if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    };

    joined.replace('\\', "/")
}
