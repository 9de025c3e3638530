//! # gitinit-projects
//!
//! Repository bootstrap library for the gitinit CLI providing:
//! - Git operations (init, remotes, initial commit) behind a command runner
//! - Remote repository name resolution with interactive conflict handling
//! - Remote repository provisioning (create or reuse)
//! - Idempotent local setup (git metadata, package manifest, ignore file)
//! - The orchestrator sequencing all of the above
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use gitinit_core::types::BootstrapArguments;
//! use gitinit_core::{CommandRunner, InteractionPrompter, RemoteRepoClient, Reporter, RuntimeConfig};
//! use gitinit_projects::orchestrator::{BootstrapOutcome, Collaborators, Orchestrator};
//!
//! # async fn example(
//! #     runner: &dyn CommandRunner,
//! #     remote: &dyn RemoteRepoClient,
//! #     prompter: &dyn InteractionPrompter,
//! #     reporter: &dyn Reporter,
//! # ) -> gitinit_core::Result<()> {
//! let config = RuntimeConfig::default();
//! let collaborators = Collaborators { runner, remote, prompter, reporter };
//! let orchestrator = Orchestrator::new(Utf8PathBuf::from("/tmp/my-app"), &config, collaborators);
//!
//! match orchestrator.run(&BootstrapArguments::default()).await? {
//!     BootstrapOutcome::Completed(report) => println!("linked {}", report.repository.name),
//!     BootstrapOutcome::Aborted => println!("stopped by user"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod bootstrapper;
pub mod git;
pub mod orchestrator;
pub mod provisioner;
pub mod resolver;

pub use bootstrapper::{LocalRepoBootstrapper, StepStatus, DEFAULT_GITIGNORE};
pub use orchestrator::{BootstrapOutcome, BootstrapReport, Collaborators, Orchestrator};
pub use provisioner::{provision, Provisioned};
pub use resolver::resolve_repo_name;
