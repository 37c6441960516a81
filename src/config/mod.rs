//! # Configuration
//!
//! Deployment identity and where it comes from (environment, CLI overrides).

mod deployment;

pub use deployment::{BrowserExtensionConfig, DeploymentConfig};
