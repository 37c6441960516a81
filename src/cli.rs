//! # Command Line Interface
//!
//! Argument surface for the deployer binary.
//!
//! ## Usage
//!
//! ```bash
//! # Install the forcelist policies and inventory registration
//! forcelist-deployer --mode install --app-name "Acme Agent" --rdid rdid-42 \
//!     --chrome-extension-id abcdefghijklmnopqrstuvwxyzabcdef
//!
//! # Remove everything this deployment owns
//! forcelist-deployer --mode uninstall --app-name "Acme Agent" --rdid rdid-42
//!
//! # Append logs to a file in addition to the console
//! forcelist-deployer --log-file /var/log/forcelist-deployer.log
//! ```
//!
//! Identity usually arrives via `FORCELIST_*` environment variables set by
//! the deployment wrapper; the flags here override the environment for
//! ad-hoc runs.

use crate::config::DeploymentConfig;
use crate::constants::DEFAULT_STORE_FILE;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Reconciliation direction for a run
///
/// Capitalized aliases (`Install`/`Uninstall`) are accepted because some
/// RMM shells pass mode values title-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Install the forcelist policies and inventory registration
    #[value(alias = "Install")]
    Install,
    /// Remove the forcelist policies and inventory registration
    #[value(alias = "Uninstall")]
    Uninstall,
}

/// Force-install a browser extension via Chrome/Edge policy and register it
/// in the software inventory
#[derive(Debug, Parser)]
#[command(name = "forcelist-deployer", version, about, long_about = None)]
pub struct Cli {
    /// Reconciliation direction
    #[arg(long, value_enum, default_value_t = Mode::Install)]
    pub mode: Mode,

    /// Policy store file (JSON); defaults to FORCELIST_STORE_PATH or
    /// policy-store.json
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Append log records to this file in addition to the console
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Application name keying the inventory registration
    #[arg(long)]
    pub app_name: Option<String>,

    /// Forcelist value name (the deployment RDID)
    #[arg(long)]
    pub rdid: Option<String>,

    /// Chrome extension identifier
    #[arg(long)]
    pub chrome_extension_id: Option<String>,

    /// Edge extension identifier
    #[arg(long)]
    pub edge_extension_id: Option<String>,
}

impl Cli {
    /// Effective deployment configuration: environment first, flags override
    #[must_use]
    pub fn deployment_config(&self) -> DeploymentConfig {
        let mut config = DeploymentConfig::from_env();
        if let Some(app_name) = &self.app_name {
            config.app_name.clone_from(app_name);
        }
        if let Some(rdid) = &self.rdid {
            config.value_name.clone_from(rdid);
        }
        if let Some(extension_id) = &self.chrome_extension_id {
            config.chrome.extension_id.clone_from(extension_id);
        }
        if let Some(extension_id) = &self.edge_extension_id {
            config.edge.extension_id.clone_from(extension_id);
        }
        config
    }

    /// Effective policy store file: flag, then environment, then default
    #[must_use]
    pub fn store_file(&self) -> PathBuf {
        self.store.clone().unwrap_or_else(|| {
            std::env::var("FORCELIST_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_FILE))
        })
    }
}
