//! # JSON File Store
//!
//! [`PolicyStore`] backend that persists the store tree to a JSON file.
//!
//! The whole tree is read at open and rewritten after every mutation. That
//! is deliberately simple: one reconciliation run touches at most a dozen
//! values, and a full rewrite keeps the on-disk file consistent even if the
//! run is interrupted between mutations.

use super::{MemoryStore, PolicyStore, StoreError, StorePath, StoreValue};
use std::fs;
use std::path::PathBuf;

/// JSON-file-backed hierarchical policy store
#[derive(Debug)]
pub struct JsonFileStore {
    inner: MemoryStore,
    file: PathBuf,
}

impl JsonFileStore {
    /// Open a store file, starting from an empty tree when the file does
    /// not exist yet. The file itself is only created on first mutation.
    pub fn open(file: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let file = file.into();
        let inner = if file.exists() {
            let contents = fs::read_to_string(&file)?;
            serde_json::from_str(&contents)?
        } else {
            MemoryStore::new()
        };
        Ok(Self { inner, file })
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&self.inner)?;
        fs::write(&self.file, contents)?;
        Ok(())
    }
}

impl PolicyStore for JsonFileStore {
    fn path_exists(&self, path: &StorePath) -> Result<bool, StoreError> {
        self.inner.path_exists(path)
    }

    fn create_path(&mut self, path: &StorePath) -> Result<(), StoreError> {
        self.inner.create_path(path)?;
        self.persist()
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
        self.inner.write_value(path, name, value)?;
        self.persist()
    }

    fn delete_value(&mut self, path: &StorePath, name: &str) -> Result<bool, StoreError> {
        let removed = self.inner.delete_value(path, name)?;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    fn delete_tree(&mut self, path: &StorePath) -> Result<bool, StoreError> {
        let removed = self.inner.delete_tree(path)?;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(p: &str) -> StorePath {
        StorePath::new(p)
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("store.json");

        let store = JsonFileStore::open(&file).unwrap();
        assert!(!store.path_exists(&path("Software")).unwrap());
        assert!(!file.exists(), "file is only created on first mutation");
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("store.json");
        let container = path("Software/Policies/Google/Chrome/ExtensionInstallForcelist");

        {
            let mut store = JsonFileStore::open(&file).unwrap();
            store.create_path(&container).unwrap();
            store
                .write_value(&container, "rdid-1", StoreValue::from("id;url"))
                .unwrap();
        }

        let reopened = JsonFileStore::open(&file).unwrap();
        assert_eq!(
            reopened.read_value(&container, "rdid-1").unwrap(),
            Some(StoreValue::from("id;url"))
        );
    }

    #[test]
    fn test_delete_persists() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("store.json");
        let container = path("Software/App");

        {
            let mut store = JsonFileStore::open(&file).unwrap();
            store.create_path(&container).unwrap();
            store.write_value(&container, "flag", StoreValue::Dword(1)).unwrap();
            assert!(store.delete_tree(&container).unwrap());
        }

        let reopened = JsonFileStore::open(&file).unwrap();
        assert!(!reopened.path_exists(&container).unwrap());
    }

    #[test]
    fn test_parent_directories_created_on_persist() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested/deeper/store.json");

        let mut store = JsonFileStore::open(&file).unwrap();
        store.create_path(&path("Software")).unwrap();
        assert!(file.exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("store.json");
        fs::write(&file, "not json at all").unwrap();

        let err = JsonFileStore::open(&file).unwrap_err();
        assert!(
            matches!(err, StoreError::Serialize(_)),
            "corrupt store file should surface as Serialize, got {err:?}"
        );
    }
}
