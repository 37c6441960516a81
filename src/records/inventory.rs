//! # Inventory Records
//!
//! Desired state for the "installed application" registration the host's
//! package inventory shows (the ARP entry).

use crate::constants::{
    DISPLAY_NAME_VALUE, DISPLAY_VERSION_VALUE, PROTECTION_FLAGS, PROTECTION_FLAG_ENABLED,
    PUBLISHER_VALUE, UNINSTALL_ROOT_PATH, UNINSTALL_STRING_PLACEHOLDER, UNINSTALL_STRING_VALUE,
};
use crate::store::{StorePath, StoreValue};

/// The software inventory registration for the deployed application
///
/// Registered under the uninstall root, keyed by application name. The
/// protection flags hide the modify/repair/remove actions because removal
/// is performed by this tool, not by the entry's own uninstall command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    /// Container the registration is written under
    pub registration_path: StorePath,
    pub display_name: String,
    pub display_version: String,
    pub publisher: String,
}

impl InventoryRecord {
    pub fn new(
        app_name: &str,
        display_name: impl Into<String>,
        display_version: impl Into<String>,
        publisher: impl Into<String>,
    ) -> Self {
        Self {
            registration_path: Self::registration_path_for(app_name),
            display_name: display_name.into(),
            display_version: display_version.into(),
            publisher: publisher.into(),
        }
    }

    /// Registration container for an application name
    #[must_use]
    pub fn registration_path_for(app_name: &str) -> StorePath {
        StorePath::new(UNINSTALL_ROOT_PATH).join(app_name)
    }

    /// Attribute set written under the registration path, in write order
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, StoreValue)> {
        let mut attributes = vec![
            (DISPLAY_NAME_VALUE, StoreValue::from(self.display_name.as_str())),
            (DISPLAY_VERSION_VALUE, StoreValue::from(self.display_version.as_str())),
            (PUBLISHER_VALUE, StoreValue::from(self.publisher.as_str())),
            (UNINSTALL_STRING_VALUE, StoreValue::from(UNINSTALL_STRING_PLACEHOLDER)),
        ];
        for flag in PROTECTION_FLAGS {
            attributes.push((flag, StoreValue::Dword(PROTECTION_FLAG_ENABLED)));
        }
        attributes
    }
}
