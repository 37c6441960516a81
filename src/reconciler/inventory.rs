//! # Inventory Processing
//!
//! Registers and deregisters the application in the software inventory.

use crate::records::InventoryRecord;
use crate::store::PolicyStore;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Register the application in the software inventory
///
/// The registration is rebuilt from scratch (delete then recreate) so
/// attributes from a previous version cannot linger. The pre-delete is
/// best-effort; creating the container and writing every attribute is not.
pub fn register<S: PolicyStore>(store: &mut S, record: &InventoryRecord) -> Result<()> {
    clear_registration(store, record);

    store.create_path(&record.registration_path).with_context(|| {
        format!(
            "failed to create registration container {}",
            record.registration_path
        )
    })?;
    info!("Created registration container {}", record.registration_path);

    for (name, value) in record.attributes() {
        store
            .write_value(&record.registration_path, name, value)
            .with_context(|| format!("failed to write registration attribute {name}"))?;
    }

    info!(
        display_name = record.display_name,
        display_version = record.display_version,
        "✅ Registered '{}' v{} in the software inventory",
        record.display_name, record.display_version
    );
    Ok(())
}

/// Remove the inventory registration if present
///
/// Returns whether a registration was actually removed.
pub fn deregister<S: PolicyStore>(store: &mut S, record: &InventoryRecord) -> Result<bool> {
    let exists = store.path_exists(&record.registration_path).with_context(|| {
        format!(
            "failed to probe registration container {}",
            record.registration_path
        )
    })?;

    if !exists {
        debug!(
            "No registration at {}, nothing to remove",
            record.registration_path
        );
        return Ok(false);
    }

    let removed = store.delete_tree(&record.registration_path).with_context(|| {
        format!(
            "failed to delete registration tree {}",
            record.registration_path
        )
    })?;

    if removed {
        info!("Removed inventory registration {}", record.registration_path);
    }
    Ok(removed)
}

/// Best-effort removal of a stale registration before recreating it
///
/// Failures here never block the rebuild; a delete that cannot proceed is
/// surfaced by the subsequent create/write instead.
fn clear_registration<S: PolicyStore>(store: &mut S, record: &InventoryRecord) {
    match store.delete_tree(&record.registration_path) {
        Ok(true) => debug!(
            "Cleared previous registration at {}",
            record.registration_path
        ),
        Ok(false) => {}
        Err(e) => debug!(
            "Tolerated failure clearing registration {}: {e}",
            record.registration_path
        ),
    }
}
