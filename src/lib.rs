//! # Forcelist Deployer Library
//!
//! Core functionality for the forcelist deployment tool: a narrow interface
//! over a hierarchical policy store, the desired-state records for browser
//! forcelist entries and the software inventory registration, and the
//! reconciler that drives one toward the other.
//!
//! The binary in `main.rs` is a thin wrapper over this crate; tests exercise
//! the same surface. Tests are included in the module files.

pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod prelude;
pub mod records;
pub mod reconciler;
pub mod store;
