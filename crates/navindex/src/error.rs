//! Fatal error type for a navigation build.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of a navigation build.
///
/// Everything that can go wrong while scanning is recovered inside the
/// scanner; only producing the output artifact can fail a run.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("Failed to serialize navigation index: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
