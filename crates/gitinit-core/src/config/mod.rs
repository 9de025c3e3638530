//! Configuration loading
//!
//! Precedence (low to high):
//! 1. Built-in defaults
//! 2. `<config-dir>/config.yaml`
//! 3. Environment variables (`GITINIT_*` prefix)
//! 4. CLI flags (handled by caller)

mod credentials;
mod loader;
mod runtime;

pub use credentials::{load_access_token, AccessToken};
pub use loader::{ConfigLoader, CONFIG_DIR_ENV};
pub use runtime::{
    CredentialsConfig, GitHubConfig, GitWorkflowConfig, ManifestConfig, RuntimeConfig,
};
