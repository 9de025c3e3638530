//! # gitinit-core
//!
//! Core library for the gitinit CLI providing:
//! - The error taxonomy shared by every crate
//! - Runtime configuration loading (`~/.gitinit/config.yaml`, `GITINIT_*`)
//! - Credential loading for the hosting platform API
//! - Data types passed between the bootstrap components
//! - Collaborator traits (command runner, remote client, prompter, reporter)

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{AccessToken, ConfigLoader, RuntimeConfig};
pub use error::{Error, Result};
pub use traits::{CommandRunner, InteractionPrompter, RemoteRepoClient, Reporter};
