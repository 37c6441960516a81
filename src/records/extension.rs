//! # Extension Policy Records
//!
//! Desired state for one browser's force-installed extension entry.

use crate::constants::{
    CHROME_FORCELIST_PATH, DEFAULT_CHROME_UPDATE_URL, DEFAULT_EDGE_UPDATE_URL,
    EDGE_FORCELIST_PATH, FORCELIST_SEPARATOR,
};
use crate::store::StorePath;
use std::fmt;

/// Browsers with a managed forcelist policy container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chrome,
    Edge,
}

impl BrowserKind {
    /// Policy container holding this browser's forcelist entries
    #[must_use]
    pub fn policy_path(self) -> StorePath {
        match self {
            Self::Chrome => StorePath::new(CHROME_FORCELIST_PATH),
            Self::Edge => StorePath::new(EDGE_FORCELIST_PATH),
        }
    }

    /// Update feed the browser's web store serves extensions from
    #[must_use]
    pub fn default_update_url(self) -> &'static str {
        match self {
            Self::Chrome => DEFAULT_CHROME_UPDATE_URL,
            Self::Edge => DEFAULT_EDGE_UPDATE_URL,
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chrome => f.write_str("Chrome"),
            Self::Edge => f.write_str("Edge"),
        }
    }
}

/// One browser's forced-install policy entry
///
/// The entry lives under the browser's policy container, keyed by
/// `value_name` (the deployment RDID), holding the rendered forcelist
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionPolicyRecord {
    pub browser: BrowserKind,
    /// Container path the entry is written under
    pub policy_path: StorePath,
    /// Key name within the container (the RDID)
    pub value_name: String,
    /// 32-character web store extension identifier
    pub extension_id: String,
    /// Update feed the browser pulls the extension from
    pub update_url: String,
}

impl ExtensionPolicyRecord {
    pub fn new(
        browser: BrowserKind,
        value_name: impl Into<String>,
        extension_id: impl Into<String>,
        update_url: impl Into<String>,
    ) -> Self {
        Self {
            browser,
            policy_path: browser.policy_path(),
            value_name: value_name.into(),
            extension_id: extension_id.into(),
            update_url: update_url.into(),
        }
    }

    /// Whether enough identity is present for this entry to be acted upon
    ///
    /// An unconfigured browser (empty extension id or update URL) is a
    /// legitimate state, not an error; the reconciler skips it.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.extension_id.is_empty() && !self.update_url.is_empty() && !self.policy_path.is_root()
    }

    /// Render the forcelist entry value: `<extension id>;<update url>`
    ///
    /// Plain concatenation, no escaping. Extension ids are browser-validated
    /// 32-character strings that cannot contain the separator; update URLs
    /// with an embedded `;` would produce an entry browsers reject.
    #[must_use]
    pub fn forcelist_value(&self) -> String {
        format!(
            "{}{}{}",
            self.extension_id, FORCELIST_SEPARATOR, self.update_url
        )
    }
}
