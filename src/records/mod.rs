//! # Records
//!
//! Desired-state records the reconciler drives the store toward: per-browser
//! extension policy entries and the software inventory registration.

mod extension;
mod inventory;

pub use extension::{BrowserKind, ExtensionPolicyRecord};
pub use inventory::InventoryRecord;
