//! # Forcelist Deployer
//!
//! A deployment tool that configures a host's browser policy state and the
//! matching software inventory registration.
//!
//! ## Overview
//!
//! One run performs one reconciliation:
//!
//! 1. **Validate** - the app name and RDID value name must be present
//! 2. **Browser policies** - write (or remove) the Chrome and Edge
//!    `ExtensionInstallForcelist` entries, each branch guarded independently
//! 3. **Inventory** - rebuild (or remove) the Add/Remove Programs style
//!    registration so the deployment platform can detect the install
//! 4. **Exit code** - 0 when every escalating step succeeded, 1 otherwise
//!
//! ## Usage
//!
//! See the [README.md](../README.md) for the environment variables and flags
//! the deployment wrapper is expected to set.

use clap::Parser;
use forcelist_deployer::cli::{Cli, Mode};
use forcelist_deployer::logging;
use forcelist_deployer::reconciler::{ReconcileStatus, Reconciler};
use forcelist_deployer::store::JsonFileStore;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();
    let status = run(&cli);
    std::process::exit(status.exit_code());
}

/// Run one reconciliation and report its status
///
/// Never panics or propagates an error to `main`; every failure path folds
/// into the returned status so the process always reaches a clean exit.
fn run(cli: &Cli) -> ReconcileStatus {
    if let Err(e) = logging::init(cli.log_file.as_deref()) {
        // No subscriber installed; stderr is all we have
        eprintln!("failed to initialize logging: {e:#}");
        return ReconcileStatus::Failure;
    }

    info!("Starting forcelist-deployer");
    info!(
        "Build info: timestamp={}, datetime={}, git_hash={}",
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_DATETIME"),
        env!("BUILD_GIT_HASH")
    );

    let config = cli.deployment_config();
    let store_file = cli.store_file();

    let mut store = match JsonFileStore::open(&store_file) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open policy store {}: {e}", store_file.display());
            return ReconcileStatus::Failure;
        }
    };
    info!("Policy store: {}", store_file.display());

    let mut reconciler = Reconciler::new(&mut store);
    match cli.mode {
        Mode::Install => reconciler.apply(&config),
        Mode::Uninstall => reconciler.revert(&config),
    }
}
