//! # Store Paths
//!
//! Normalized hierarchical paths into the policy store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized path addressing a container in the hierarchical policy store
///
/// Segments are joined with `/`. Both `/` and `\` are accepted on input so
/// Windows-style policy paths can be used verbatim; empty segments are
/// dropped during normalization. A path with no segments addresses the
/// store root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorePath(String);

impl StorePath {
    /// Build a normalized path from any separator convention
    pub fn new(path: impl AsRef<str>) -> Self {
        let normalized = path
            .as_ref()
            .split(['/', '\\'])
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        Self(normalized)
    }

    /// Append a child segment (itself normalized)
    #[must_use]
    pub fn join(&self, segment: &str) -> Self {
        Self::new(format!("{}/{segment}", self.0))
    }

    /// Path segments from root to leaf
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|segment| !segment.is_empty())
    }

    /// Whether this path addresses the store root
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StorePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for StorePath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
