//! # Policy Store
//!
//! The hierarchical key/value store the reconciler reads and writes through.
//!
//! The store is modeled as a tree of containers (addressed by [`StorePath`])
//! each holding named typed values. Backends implement [`PolicyStore`]:
//! - [`MemoryStore`] keeps the tree in memory (tests, dry runs)
//! - [`JsonFileStore`] persists the tree to a JSON file after every mutation

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

mod json;
mod memory;
mod path;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use path::StorePath;

/// A typed value stored under a container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreValue {
    /// String-typed value (REG_SZ analog)
    String(String),
    /// Unsigned 32-bit value (REG_DWORD analog)
    Dword(u32),
}

impl fmt::Display for StoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Dword(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for StoreValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for StoreValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<u32> for StoreValue {
    fn from(value: u32) -> Self {
        Self::Dword(value)
    }
}

/// Failures surfaced by store backends
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed container does not exist
    #[error("store path not found: {0}")]
    PathNotFound(StorePath),
    /// The backing medium failed
    #[error("store i/o failure: {0}")]
    Io(#[from] std::io::Error),
    /// The persisted tree could not be encoded or decoded
    #[error("store serialization failure: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Narrow interface over the hierarchical policy store
///
/// Reads are tolerant: probing or reading something absent is `Ok` with a
/// negative answer. Writes require their container to exist except for
/// `create_path`, which builds missing intermediate containers. Deletes
/// report whether anything was actually removed so callers can distinguish
/// cleanup from no-op without treating absence as an error.
pub trait PolicyStore {
    /// Whether a container path currently exists
    fn path_exists(&self, path: &StorePath) -> Result<bool, StoreError>;

    /// Create a container path, including missing intermediate containers
    /// Creating an existing path succeeds without change
    fn create_path(&mut self, path: &StorePath) -> Result<(), StoreError>;

    /// Read a named value; `None` when the value or its container is absent
    fn read_value(&self, path: &StorePath, name: &str) -> Result<Option<StoreValue>, StoreError>;

    /// Write a named value under an existing container
    /// Fails with [`StoreError::PathNotFound`] when the container is absent
    fn write_value(
        &mut self,
        path: &StorePath,
        name: &str,
        value: StoreValue,
    ) -> Result<(), StoreError>;

    /// Delete a named value
    /// Returns true if a value was removed, false if nothing was there
    fn delete_value(&mut self, path: &StorePath, name: &str) -> Result<bool, StoreError>;

    /// Delete a container and everything beneath it
    /// Returns true if a container was removed, false if nothing was there
    fn delete_tree(&mut self, path: &StorePath) -> Result<bool, StoreError>;
}
