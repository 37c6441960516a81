//! # Deployment Configuration
//!
//! Deployment identity loaded from environment variables.

use crate::constants::{DEFAULT_DISPLAY_VERSION, DEFAULT_PUBLISHER};
use crate::records::{BrowserKind, ExtensionPolicyRecord, InventoryRecord};

/// Per-browser extension settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserExtensionConfig {
    /// Web store extension identifier; empty when the browser is not targeted
    pub extension_id: String,
    /// Update feed the browser pulls the extension from
    pub update_url: String,
}

/// Deployment identity for one managed application
///
/// All settings can be provided by the deployment wrapper via `FORCELIST_*`
/// environment variables; CLI flags override the environment. An empty app
/// name or value name fails validation before any store work happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    /// Application name; keys the inventory registration path
    pub app_name: String,
    /// Forcelist value name (the deployment RDID); keys both policy entries
    pub value_name: String,
    /// Name shown in the software inventory; falls back to `app_name` when empty
    pub display_name: String,
    pub display_version: String,
    pub publisher: String,
    pub chrome: BrowserExtensionConfig,
    pub edge: BrowserExtensionConfig,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            app_name: String::new(),
            value_name: String::new(),
            display_name: String::new(),
            display_version: DEFAULT_DISPLAY_VERSION.to_string(),
            publisher: DEFAULT_PUBLISHER.to_string(),
            chrome: BrowserExtensionConfig {
                extension_id: String::new(),
                update_url: BrowserKind::Chrome.default_update_url().to_string(),
            },
            edge: BrowserExtensionConfig {
                extension_id: String::new(),
                update_url: BrowserKind::Edge.default_update_url().to_string(),
            },
        }
    }
}

impl DeploymentConfig {
    /// Load configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            app_name: env_var_or_default_str("FORCELIST_APP_NAME", ""),
            value_name: env_var_or_default_str("FORCELIST_RDID", ""),
            display_name: env_var_or_default_str("FORCELIST_DISPLAY_NAME", ""),
            display_version: env_var_or_default_str(
                "FORCELIST_DISPLAY_VERSION",
                DEFAULT_DISPLAY_VERSION,
            ),
            publisher: env_var_or_default_str("FORCELIST_PUBLISHER", DEFAULT_PUBLISHER),
            chrome: BrowserExtensionConfig {
                extension_id: env_var_or_default_str("FORCELIST_CHROME_EXTENSION_ID", ""),
                update_url: env_var_or_default_str(
                    "FORCELIST_CHROME_UPDATE_URL",
                    BrowserKind::Chrome.default_update_url(),
                ),
            },
            edge: BrowserExtensionConfig {
                extension_id: env_var_or_default_str("FORCELIST_EDGE_EXTENSION_ID", ""),
                update_url: env_var_or_default_str(
                    "FORCELIST_EDGE_UPDATE_URL",
                    BrowserKind::Edge.default_update_url(),
                ),
            },
        }
    }

    /// Extension policy records for every supported browser, in processing order
    ///
    /// Both records are always built; the reconciler gates on
    /// [`ExtensionPolicyRecord::is_complete`] so an unconfigured browser is
    /// skipped rather than treated as an error.
    #[must_use]
    pub fn extension_policies(&self) -> Vec<ExtensionPolicyRecord> {
        vec![
            ExtensionPolicyRecord::new(
                BrowserKind::Chrome,
                self.value_name.as_str(),
                self.chrome.extension_id.as_str(),
                self.chrome.update_url.as_str(),
            ),
            ExtensionPolicyRecord::new(
                BrowserKind::Edge,
                self.value_name.as_str(),
                self.edge.extension_id.as_str(),
                self.edge.update_url.as_str(),
            ),
        ]
    }

    /// Inventory record derived from the identity fields
    #[must_use]
    pub fn inventory_record(&self) -> InventoryRecord {
        let display_name = if self.display_name.is_empty() {
            self.app_name.as_str()
        } else {
            self.display_name.as_str()
        };
        InventoryRecord::new(
            &self.app_name,
            display_name,
            self.display_version.as_str(),
            self.publisher.as_str(),
        )
    }
}

/// Read environment variable as string or return default
fn env_var_or_default_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
