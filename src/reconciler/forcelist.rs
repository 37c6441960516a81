//! # Forcelist Processing
//!
//! Installs and removes one browser's `ExtensionInstallForcelist` entry.
//! Called once per browser record; failures here are classified by the
//! caller (escalated during apply, tolerated during revert).

use crate::records::ExtensionPolicyRecord;
use crate::store::{PolicyStore, StoreValue};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Install (or refresh) one browser's forcelist entry
///
/// The container is created when missing and the value is written
/// unconditionally with no read-before-write check; reruns converge on the
/// same state instead of erroring on what already exists.
pub fn install_entry<S: PolicyStore>(store: &mut S, record: &ExtensionPolicyRecord) -> Result<()> {
    let exists = store.path_exists(&record.policy_path).with_context(|| {
        format!(
            "failed to probe {} policy container {}",
            record.browser, record.policy_path
        )
    })?;

    if !exists {
        store.create_path(&record.policy_path).with_context(|| {
            format!(
                "failed to create {} policy container {}",
                record.browser, record.policy_path
            )
        })?;
        info!(
            browser = %record.browser,
            "Created {} policy container {}",
            record.browser, record.policy_path
        );
    }

    let value = record.forcelist_value();
    store
        .write_value(
            &record.policy_path,
            &record.value_name,
            StoreValue::from(value.as_str()),
        )
        .with_context(|| {
            format!(
                "failed to write {} forcelist value '{}'",
                record.browser, record.value_name
            )
        })?;

    info!(
        browser = %record.browser,
        value_name = record.value_name,
        "✅ Installed {} forcelist entry '{}' = {}",
        record.browser, record.value_name, value
    );
    Ok(())
}

/// Remove one browser's forcelist entry if it is present
///
/// The container must already exist for anything to happen; a machine that
/// never had the policy uninstalls cleanly. Returns whether an entry was
/// actually removed.
pub fn remove_entry<S: PolicyStore>(
    store: &mut S,
    record: &ExtensionPolicyRecord,
) -> Result<bool> {
    let exists = store.path_exists(&record.policy_path).with_context(|| {
        format!(
            "failed to probe {} policy container {}",
            record.browser, record.policy_path
        )
    })?;

    if !exists {
        debug!(
            browser = %record.browser,
            "{} policy container {} not present, nothing to remove",
            record.browser, record.policy_path
        );
        return Ok(false);
    }

    let removed = store
        .delete_value(&record.policy_path, &record.value_name)
        .with_context(|| {
            format!(
                "failed to delete {} forcelist entry '{}'",
                record.browser, record.value_name
            )
        })?;

    if removed {
        info!(
            browser = %record.browser,
            value_name = record.value_name,
            "Removed {} forcelist entry '{}'",
            record.browser, record.value_name
        );
    } else {
        debug!(
            browser = %record.browser,
            "{} forcelist entry '{}' already absent",
            record.browser, record.value_name
        );
    }
    Ok(removed)
}
