//! # Prelude
//!
//! Re-exports commonly used types for convenience.
//!
//! ```rust
//! use forcelist_deployer::prelude::*;
//! ```
//!
//! This brings into scope the store interface and backends, the
//! desired-state records, the deployment configuration, and the reconciler
//! with its status and validation types.

pub use crate::config::{BrowserExtensionConfig, DeploymentConfig};
pub use crate::records::{BrowserKind, ExtensionPolicyRecord, InventoryRecord};
pub use crate::reconciler::{
    validate_deployment, ReconcileStatus, Reconciler, ValidationError,
};
pub use crate::store::{
    JsonFileStore, MemoryStore, PolicyStore, StoreError, StorePath, StoreValue,
};
