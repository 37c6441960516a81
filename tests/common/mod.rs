//! Common test utilities for reconciler scenario tests
//!
//! Provides deployment config builders and a fault-injecting store wrapper
//! so tests can simulate backend failures without a real faulty medium.

use forcelist_deployer::prelude::*;

/// Deployment targeting both browsers, as an RMM wrapper would configure it
pub fn both_browsers_config() -> DeploymentConfig {
    DeploymentConfig {
        app_name: "Acme Agent".to_string(),
        value_name: "rdid-42".to_string(),
        chrome: BrowserExtensionConfig {
            extension_id: "abcdefghijklmnopqrstuvwxyzabcdef".to_string(),
            update_url: "https://clients2.google.com/service/update2/crx".to_string(),
        },
        edge: BrowserExtensionConfig {
            extension_id: "fedcbazyxwvutsrqponmlkjihgfedcba".to_string(),
            update_url: "https://edge.microsoft.com/extensionwebstorebase/v1/crx".to_string(),
        },
        ..DeploymentConfig::default()
    }
}

/// Deployment targeting Edge only; Chrome is deliberately unconfigured
pub fn edge_only_config() -> DeploymentConfig {
    let mut config = both_browsers_config();
    config.chrome.extension_id = String::new();
    config
}

/// Store wrapper that injects faults on selected operations
///
/// Delegates to an in-memory store and fails with an i/o error when the
/// targeted value name or tree path is touched. Reads and untargeted
/// operations pass through untouched.
#[derive(Debug, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    fail_value_writes: Vec<String>,
    fail_value_deletes: Vec<String>,
    fail_tree_deletes: Vec<StorePath>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any `write_value` for this value name
    pub fn fail_write(mut self, name: &str) -> Self {
        self.fail_value_writes.push(name.to_string());
        self
    }

    /// Fail any `delete_value` for this value name
    pub fn fail_delete(mut self, name: &str) -> Self {
        self.fail_value_deletes.push(name.to_string());
        self
    }

    /// Fail any `delete_tree` of this path
    pub fn fail_tree_delete(mut self, path: &StorePath) -> Self {
        self.fail_tree_deletes.push(path.clone());
        self
    }
}

fn injected_fault() -> StoreError {
    StoreError::Io(std::io::Error::other("injected store fault"))
}

impl PolicyStore for FlakyStore {
    fn path_exists(&self, path: &StorePath) -> Result<bool, StoreError> {
        self.inner.path_exists(path)
    }

    fn create_path(&mut self, path: &StorePath) -> Result<(), StoreError> {
        self.inner.create_path(path)
    }

    fn read_value(&self, path: &StorePath, name: &str) -> Result<Option<StoreValue>, StoreError> {
        self.inner.read_value(path, name)
    }

    fn write_value(
        &mut self,
        path: &StorePath,
        name: &str,
        value: StoreValue,
    ) -> Result<(), StoreError> {
        if self.fail_value_writes.iter().any(|n| n == name) {
            return Err(injected_fault());
        }
        self.inner.write_value(path, name, value)
    }

    fn delete_value(&mut self, path: &StorePath, name: &str) -> Result<bool, StoreError> {
        if self.fail_value_deletes.iter().any(|n| n == name) {
            return Err(injected_fault());
        }
        self.inner.delete_value(path, name)
    }

    fn delete_tree(&mut self, path: &StorePath) -> Result<bool, StoreError> {
        if self.fail_tree_deletes.iter().any(|p| p == path) {
            return Err(injected_fault());
        }
        self.inner.delete_tree(path)
    }
}
