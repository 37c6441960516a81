//! # Constants
//!
//! Shared constants used throughout the deployer.
//!
//! These values represent the fixed store layout this tool manages plus
//! reasonable defaults that can be overridden via configuration or
//! environment variables where applicable.

/// Policy container holding Chrome's force-installed extension entries
pub const CHROME_FORCELIST_PATH: &str =
    "Software/Policies/Google/Chrome/ExtensionInstallForcelist";

/// Policy container holding Edge's force-installed extension entries
pub const EDGE_FORCELIST_PATH: &str =
    "Software/Policies/Microsoft/Edge/ExtensionInstallForcelist";

/// Root container for software inventory registrations (ARP entries)
pub const UNINSTALL_ROOT_PATH: &str = "Software/Microsoft/Windows/CurrentVersion/Uninstall";

/// Default update feed for Chrome web store extensions
pub const DEFAULT_CHROME_UPDATE_URL: &str = "https://clients2.google.com/service/update2/crx";

/// Default update feed for Edge add-on store extensions
pub const DEFAULT_EDGE_UPDATE_URL: &str =
    "https://edge.microsoft.com/extensionwebstorebase/v1/crx";

/// Separator between extension id and update URL in a forcelist value
/// Neither field is escaped; ids and URLs must not contain it themselves
pub const FORCELIST_SEPARATOR: char = ';';

/// Inventory value name for the human-readable application name
pub const DISPLAY_NAME_VALUE: &str = "DisplayName";

/// Inventory value name for the application version
pub const DISPLAY_VERSION_VALUE: &str = "DisplayVersion";

/// Inventory value name for the publishing organization
pub const PUBLISHER_VALUE: &str = "Publisher";

/// Inventory value name for the uninstall command
pub const UNINSTALL_STRING_VALUE: &str = "UninstallString";

/// Sentinel uninstall command; removal happens through this tool, not
/// through the inventory entry's own uninstall action
pub const UNINSTALL_STRING_PLACEHOLDER: &str = "NA";

/// Inventory flags that hide the modify/repair/remove buttons in package
/// management UIs, in write order
pub const PROTECTION_FLAGS: [&str; 3] = ["NoRemove", "NoRepair", "NoModify"];

/// Value written for each protection flag (1 = enabled)
pub const PROTECTION_FLAG_ENABLED: u32 = 1;

/// Default policy store file when neither `--store` nor
/// `FORCELIST_STORE_PATH` is set
pub const DEFAULT_STORE_FILE: &str = "policy-store.json";

/// Default inventory display version
pub const DEFAULT_DISPLAY_VERSION: &str = "1.0.0";

/// Default inventory publisher
pub const DEFAULT_PUBLISHER: &str = "Microscaler";
