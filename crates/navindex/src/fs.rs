//! File-system boundary used by the tree scanner.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

/// Entry type reported by a symlink-aware stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
    Symlink,
    /// Sockets, fifos, devices and anything else that is never indexed.
    Other,
}

/// Low-level file-system calls needed to scan a content tree.
///
/// Production uses [`RealFileSystem`], while tests can inject
/// `MockFileSystem` to simulate unreadable directories and files.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Returns whether `path` exists, following symlinks.
    fn exists(&self, path: &Path) -> bool;

    /// Lists the basenames of the direct children of `path`, in listing
    /// order.
    ///
    /// # Errors
    /// Returns an error when the directory cannot be opened or iterated.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Classifies `path` without following a trailing symlink.
    ///
    /// # Errors
    /// Returns an error when metadata for `path` cannot be read.
    fn node_kind(&self, path: &Path) -> io::Result<NodeKind>;

    /// Reads `path` as UTF-8 text, replacing invalid sequences.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read.
    fn read_text(&self, path: &Path) -> io::Result<String>;
}

/// [`FileSystem`] backed by `std::fs`.
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let file_name = entry?.file_name();
            match file_name.into_string() {
                Ok(name) => names.push(name),
                Err(raw_name) => {
                    warn!("Skipping non UTF-8 entry {}", path.join(raw_name).display());
                }
            }
        }

        Ok(names)
    }

    fn node_kind(&self, path: &Path) -> io::Result<NodeKind> {
        let file_type = fs::symlink_metadata(path)?.file_type();
        let kind = if file_type.is_symlink() {
            NodeKind::Symlink
        } else if file_type.is_dir() {
            NodeKind::Directory
        } else if file_type.is_file() {
            NodeKind::File
        } else {
            NodeKind::Other
        };

        Ok(kind)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
