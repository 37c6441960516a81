//! # Reconciler
//!
//! Drives the policy store toward the desired install or uninstall state.
//!
//! One run is one reconciliation: validate the deployment identity, process
//! each browser's forcelist entry and the inventory registration in order,
//! and fold escalated failures into a single [`ReconcileStatus`]. A failing
//! branch never stops the other branches; absence of something to remove is
//! never a failure.

pub mod forcelist;
pub mod inventory;
pub mod status;
pub mod validation;

pub use status::ReconcileStatus;
pub use validation::{validate_deployment, ValidationError};

use crate::config::DeploymentConfig;
use crate::store::PolicyStore;
use tracing::{debug, error, info};

/// Reconciles the policy store toward a desired deployment state
#[derive(Debug)]
pub struct Reconciler<'a, S: PolicyStore> {
    store: &'a mut S,
}

impl<'a, S: PolicyStore> Reconciler<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Install the browser forcelist entries and the inventory registration
    ///
    /// Each browser branch and the inventory branch are guarded
    /// independently: an escalated failure in one marks the run failed but
    /// the remaining branches still execute.
    pub fn apply(&mut self, config: &DeploymentConfig) -> ReconcileStatus {
        info!("🔄 Applying deployment '{}'", config.app_name);

        if let Err(e) = validation::validate_deployment(config) {
            error!("Validation failed: {e}");
            return ReconcileStatus::Failure;
        }

        let mut run_status = ReconcileStatus::Success;

        for record in config.extension_policies() {
            if !record.is_complete() {
                debug!(
                    browser = %record.browser,
                    "No {} extension configured, skipping",
                    record.browser
                );
                continue;
            }
            if let Err(e) = forcelist::install_entry(self.store, &record) {
                error!(
                    browser = %record.browser,
                    "❌ Failed to install {} forcelist entry: {e:#}",
                    record.browser
                );
                run_status = ReconcileStatus::Failure;
                // Continue with the other browser instead of returning early
            }
        }

        let inventory = config.inventory_record();
        if let Err(e) = inventory::register(self.store, &inventory) {
            error!(
                "❌ Failed to register '{}' in the software inventory: {e:#}",
                inventory.display_name
            );
            run_status = ReconcileStatus::Failure;
        }

        if run_status.is_success() {
            info!("Installation completed successfully");
        } else {
            error!("Installation finished with errors");
        }
        run_status
    }

    /// Remove the browser forcelist entries and the inventory registration
    ///
    /// Pure best-effort cleanup: once validation passes, nothing in a revert
    /// escalates. Removal failures are tolerated and only visible at debug
    /// level, matching the historical silent-cleanup behavior at the default
    /// filter.
    pub fn revert(&mut self, config: &DeploymentConfig) -> ReconcileStatus {
        info!("🔄 Reverting deployment '{}'", config.app_name);

        if let Err(e) = validation::validate_deployment(config) {
            error!("Validation failed: {e}");
            return ReconcileStatus::Failure;
        }

        for record in config.extension_policies() {
            if !record.is_complete() {
                debug!(
                    browser = %record.browser,
                    "No {} extension configured, skipping",
                    record.browser
                );
                continue;
            }
            if let Err(e) = forcelist::remove_entry(self.store, &record) {
                debug!(
                    browser = %record.browser,
                    "Tolerated failure removing {} forcelist entry: {e:#}",
                    record.browser
                );
            }
        }

        let inventory = config.inventory_record();
        if let Err(e) = inventory::deregister(self.store, &inventory) {
            debug!("Tolerated failure removing inventory registration: {e:#}");
        }

        info!("Uninstallation completed successfully");
        ReconcileStatus::Success
    }
}
