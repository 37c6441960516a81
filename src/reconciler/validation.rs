//! # Deployment Validation
//!
//! Gates reconciliation on the identity fields every store path depends on.
//! Runs as the first step of both apply and revert; a failure here aborts
//! the whole run before any store mutation is attempted.

use crate::config::DeploymentConfig;
use crate::store::StorePath;
use thiserror::Error;

/// Configuration problems that block reconciliation entirely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Without an app name the inventory registration path cannot be built
    #[error("deployment.appName is required but is empty")]
    MissingAppName,
    /// Without a value name no policy entry can be addressed
    #[error("deployment.valueName is required but is empty")]
    MissingValueName,
}

/// Validate the deployment identity before any store work happens
///
/// Whitespace-only values count as empty; a deployment wrapper passing
/// `" "` is as misconfigured as one passing nothing. The app name must
/// additionally survive path normalization with at least one segment: a
/// separator-only name like `"/"` normalizes to nothing and would address
/// the shared uninstall root itself instead of a registration beneath it.
pub fn validate_deployment(config: &DeploymentConfig) -> Result<(), ValidationError> {
    if StorePath::new(config.app_name.trim()).is_root() {
        return Err(ValidationError::MissingAppName);
    }
    if config.value_name.trim().is_empty() {
        return Err(ValidationError::MissingValueName);
    }
    Ok(())
}
