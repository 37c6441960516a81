//! # In-Memory Store
//!
//! Tree-backed [`PolicyStore`] with no persistence. The reconciler tests run
//! against this backend; [`super::JsonFileStore`] wraps it for durability.

use super::{PolicyStore, StoreError, StorePath, StoreValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One container in the store tree
///
/// `BTreeMap` keeps serialized output deterministic, which makes persisted
/// store files diff-friendly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Container {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    values: BTreeMap<String, StoreValue>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    children: BTreeMap<String, Container>,
}

/// In-memory hierarchical policy store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    root: Container,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn container(&self, path: &StorePath) -> Option<&Container> {
        let mut current = &self.root;
        for segment in path.segments() {
            current = current.children.get(segment)?;
        }
        Some(current)
    }

    fn container_mut(&mut self, path: &StorePath) -> Option<&mut Container> {
        let mut current = &mut self.root;
        for segment in path.segments() {
            current = current.children.get_mut(segment)?;
        }
        Some(current)
    }
}

impl PolicyStore for MemoryStore {
    fn path_exists(&self, path: &StorePath) -> Result<bool, StoreError> {
        Ok(self.container(path).is_some())
    }

    fn create_path(&mut self, path: &StorePath) -> Result<(), StoreError> {
        let mut current = &mut self.root;
        for segment in path.segments() {
            current = current.children.entry(segment.to_string()).or_default();
        }
        Ok(())
    }

    fn read_value(&self, path: &StorePath, name: &str) -> Result<Option<StoreValue>, StoreError> {
        Ok(self
            .container(path)
            .and_then(|container| container.values.get(name).cloned()))
    }

    fn write_value(
        &mut self,
        path: &StorePath,
        name: &str,
        value: StoreValue,
    ) -> Result<(), StoreError> {
        match self.container_mut(path) {
            Some(container) => {
                container.values.insert(name.to_string(), value);
                Ok(())
            }
            None => Err(StoreError::PathNotFound(path.clone())),
        }
    }

    fn delete_value(&mut self, path: &StorePath, name: &str) -> Result<bool, StoreError> {
        match self.container_mut(path) {
            Some(container) => Ok(container.values.remove(name).is_some()),
            None => Ok(false),
        }
    }

    fn delete_tree(&mut self, path: &StorePath) -> Result<bool, StoreError> {
        let segments: Vec<&str> = path.segments().collect();
        let Some((leaf, ancestors)) = segments.split_last() else {
            // The root container itself is never deleted
            return Ok(false);
        };

        let mut current = &mut self.root;
        for segment in ancestors {
            match current.children.get_mut(*segment) {
                Some(child) => current = child,
                None => return Ok(false),
            }
        }
        Ok(current.children.remove(*leaf).is_some())
    }
}
