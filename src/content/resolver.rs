//! Identifier-to-path resolution
//!
//! The naming convention is fixed: an identifier maps to a directory path
//! under the content root, and the backing file inside that directory is
//! named after the final segment. `introduction/overview` resolves to
//! `<root>/introduction/overview/overview.mdx`.

use std::path::{Path, PathBuf};

use super::types::ContentId;

/// Default file extension for topic files
pub const DEFAULT_EXTENSION: &str = "mdx";

/// Resolves validated content identifiers to backing file paths
#[derive(Debug, Clone)]
pub struct ContentResolver {
    root: PathBuf,
    extension: String,
}

impl ContentResolver {
    /// Create a resolver over a content root with the default extension
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_extension(root, DEFAULT_EXTENSION)
    }

    /// Create a resolver with a custom topic file extension
    pub fn with_extension(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// The content root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The topic file extension
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Compute the backing file path for an identifier.
    ///
    /// Pure path computation; existence is checked by the read itself so a
    /// missing file surfaces from the single filesystem access.
    pub fn resolve(&self, id: &ContentId) -> PathBuf {
        let mut path = self.root.clone();
        for segment in id.segments() {
            path.push(segment);
        }
        path.push(format!("{}.{}", id.last_segment(), self.extension));
        path
    }
}
