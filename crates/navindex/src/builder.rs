//! Navigation build driver: scan, serialize, write, report.

use std::fs;

use tracing::{error, info};

use crate::config::NavConfig;
use crate::error::NavError;
use crate::fs::FileSystem;
use crate::model::Index;
use crate::scanner::TreeScanner;

/// Result of a successful index write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteSummary {
    /// Size of the written artifact in bytes.
    pub bytes: usize,
    /// Documents reachable from the index root.
    pub documents: usize,
}

impl WriteSummary {
    /// Artifact size in kibibytes, for operator output.
    #[allow(clippy::cast_precision_loss)]
    pub fn kilobytes(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

/// Builds the navigation index for one configuration and persists it.
pub struct IndexBuilder<'a> {
    config: &'a NavConfig,
    fs: &'a dyn FileSystem,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(config: &'a NavConfig, fs: &'a dyn FileSystem) -> Self {
        Self { config, fs }
    }

    /// Scans the content root into a fresh [`Index`].
    ///
    /// A missing content root yields an empty index.
    pub fn build(&self) -> Index {
        let content_root = &self.config.content_root;
        info!("Scanning {} directory...", content_root.display());

        if !self.fs.exists(content_root) {
            info!("Directory not found");
            return Index::default();
        }

        let scanner = TreeScanner::new(self.config, self.fs);
        let index = Index {
            documents: scanner.scan(content_root, &self.config.path_prefix),
        };
        info!("Found {} files", index.document_count());

        index
    }

    /// Serializes `index` as pretty JSON and overwrites the output file.
    ///
    /// # Errors
    /// Returns an error when the index cannot be serialized or the output
    /// file cannot be written.
    pub fn write(&self, index: &Index) -> Result<WriteSummary, NavError> {
        let output_path = &self.config.output_path;
        info!("Writing {}...", output_path.display());

        let json = serde_json::to_string_pretty(index)?;
        fs::write(output_path, &json).map_err(|source| NavError::Write {
            path: output_path.clone(),
            source,
        })?;

        Ok(WriteSummary {
            bytes: json.len(),
            documents: index.document_count(),
        })
    }

    /// Runs a full build and logs progress and the final summary.
    ///
    /// # Errors
    /// Returns an error when the output file cannot be produced; scan faults
    /// are logged and never fail the run.
    pub fn run(&self) -> Result<WriteSummary, NavError> {
        info!("Navigation Builder");
        info!("Building navigation structure...");

        let index = self.build();
        let summary = match self.write(&index) {
            Ok(summary) => summary,
            Err(err) => {
                error!("Error writing navigation index: {err}");
                return Err(err);
            }
        };

        info!("Success! {} generated", self.config.output_path.display());
        info!("File size: {:.2} KB", summary.kilobytes());
        info!("Total items: {}", summary.documents);
        info!("Build complete!");

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::fs::RealFileSystem;
    use crate::model::EntryKind;

    fn write_post(config: &NavConfig, relative: &str, content: &str) {
        let path = config.content_root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(path, content).expect("failed to write post");
    }

    #[test]
    fn test_build_missing_content_root_is_empty() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let config = NavConfig::for_base_dir(dir.path());
        let builder = IndexBuilder::new(&config, &RealFileSystem);

        // Act
        let index = builder.build();

        // Assert
        assert_eq!(index, Index::default());
    }

    #[test]
    fn test_build_prefixes_paths_with_content_dir() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let config = NavConfig::for_base_dir(dir.path());
        write_post(&config, "about.html", "<title>About</title>");
        write_post(&config, "tips/first-tip.html", "");
        let builder = IndexBuilder::new(&config, &RealFileSystem);

        // Act
        let index = builder.build();

        // Assert
        assert_eq!(index.documents[0].path, "posts/about.html");
        assert_eq!(index.documents[1].path, "posts/tips");
        let tip = &index.documents[1].children()[0];
        assert_eq!(tip.path, "posts/tips/first-tip.html");
        assert_eq!(
            tip.kind,
            EntryKind::Document {
                title: "first tip".to_string(),
                hidden: false,
            }
        );
        assert_eq!(index.document_count(), 2);
    }

    #[test]
    fn test_write_produces_two_space_pretty_json() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let config = NavConfig::for_base_dir(dir.path());
        write_post(&config, "about.html", "<title>About</title>");
        let builder = IndexBuilder::new(&config, &RealFileSystem);
        let index = builder.build();

        // Act
        let summary = builder.write(&index).expect("write should succeed");

        // Assert
        let written = fs::read_to_string(&config.output_path).expect("output should exist");
        let expected = "{\n  \"posts\": [\n    {\n      \"name\": \"about.html\",\n      \"path\": \
                        \"posts/about.html\",\n      \"type\": \"file\",\n      \"title\": \
                        \"About\",\n      \"hidden\": false\n    }\n  ]\n}";
        assert_eq!(written, expected);
        assert_eq!(summary.bytes, expected.len());
        assert_eq!(summary.documents, 1);
    }

    #[test]
    fn test_write_overwrites_existing_output() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let config = NavConfig::for_base_dir(dir.path());
        fs::write(&config.output_path, "stale content that is longer than the index")
            .expect("failed to write stale output");
        let builder = IndexBuilder::new(&config, &RealFileSystem);

        // Act
        builder
            .write(&Index::default())
            .expect("write should succeed");

        // Assert
        let written = fs::read_to_string(&config.output_path).expect("output should exist");
        assert_eq!(written, "{\n  \"posts\": []\n}");
    }

    #[test]
    fn test_write_failure_is_reported() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let mut config = NavConfig::for_base_dir(dir.path());
        config.output_path = dir.path().join("missing-dir").join("navigation.json");
        let builder = IndexBuilder::new(&config, &RealFileSystem);

        // Act
        let result = builder.run();

        // Assert
        assert!(matches!(result, Err(NavError::Write { path, .. }) if path == config.output_path));
    }

    #[test]
    fn test_run_is_deterministic() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let config = NavConfig::for_base_dir(dir.path());
        write_post(&config, "b.html", "<h1>B</h1>");
        write_post(&config, "a/c.html", "<title>C</title>");
        write_post(&config, "a/privacy.html", "");
        let builder = IndexBuilder::new(&config, &RealFileSystem);

        // Act
        builder.run().expect("first run should succeed");
        let first = fs::read(&config.output_path).expect("output should exist");
        builder.run().expect("second run should succeed");
        let second = fs::read(&config.output_path).expect("output should exist");

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn test_kilobytes() {
        // Arrange
        let summary = WriteSummary {
            bytes: 1536,
            documents: 0,
        };

        // Act
        let kilobytes = summary.kilobytes();

        // Assert
        assert!((kilobytes - 1.5).abs() < f64::EPSILON);
    }
}
