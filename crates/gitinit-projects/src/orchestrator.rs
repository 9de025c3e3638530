//! Bootstrap orchestration
//!
//! Sequence for a run:
//! 1. Preflight: load the access token ([`preflight`]); the caller needs it to
//!    build the remote client, so it runs before [`Orchestrator::run`]
//! 2. Local setup steps 1-3 (git metadata, manifest, ignore file)
//! 3. Name resolution, possibly prompting the user
//! 4. Remote provisioning (create or reuse)
//! 5. Local setup steps 4-5 (remote linkage, initial commit)
//!
//! Any error stops the run where it happened. Nothing already done is rolled
//! back: a repository created in step 4 stays on the hosting platform if step 5
//! fails.

use crate::bootstrapper::{LocalRepoBootstrapper, StepStatus};
use crate::provisioner::provision;
use crate::resolver::resolve_repo_name;
use camino::{Utf8Path, Utf8PathBuf};
use gitinit_core::config::load_access_token;
use gitinit_core::types::{BootstrapArguments, RemoteRepositoryDescriptor, ResolutionOutcome};
use gitinit_core::{
    AccessToken, CommandRunner, Error, InteractionPrompter, RemoteRepoClient, Reporter, Result,
    RuntimeConfig,
};
use tracing::{debug, info};

/// Check that credentials are present and non-empty, returning the token
///
/// # Errors
/// `Configuration` when the variable, the file, or its contents are missing.
pub fn preflight(config: &RuntimeConfig, config_dir: &Utf8Path) -> Result<AccessToken> {
    load_access_token(&config.credentials, config_dir)
}

/// External collaborators used by a run
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub runner: &'a dyn CommandRunner,
    pub remote: &'a dyn RemoteRepoClient,
    pub prompter: &'a dyn InteractionPrompter,
    pub reporter: &'a dyn Reporter,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Every step completed
    Completed(BootstrapReport),
    /// The user chose to exit at a name conflict
    Aborted,
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Repository linked as the origin remote
    pub repository: RemoteRepositoryDescriptor,
    /// `true` when the repository was created by this run
    pub created: bool,
    /// `true` when this run made the initial commit
    pub committed: bool,
}

/// Drives a full bootstrap run in one working directory
pub struct Orchestrator<'a> {
    workdir: Utf8PathBuf,
    config: &'a RuntimeConfig,
    collaborators: Collaborators<'a>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        workdir: Utf8PathBuf,
        config: &'a RuntimeConfig,
        collaborators: Collaborators<'a>,
    ) -> Self {
        Self {
            workdir,
            config,
            collaborators,
        }
    }

    fn bootstrapper(&self) -> LocalRepoBootstrapper<'_> {
        LocalRepoBootstrapper::new(
            &self.workdir,
            self.collaborators.runner,
            self.collaborators.reporter,
            &self.config.git,
            &self.config.manifest,
        )
    }

    /// Run the bootstrap sequence
    pub async fn run(&self, args: &BootstrapArguments) -> Result<BootstrapOutcome> {
        let Collaborators {
            remote,
            prompter,
            reporter,
            ..
        } = self.collaborators;

        let candidate = match &args.repo_name {
            Some(name) => name.clone(),
            None => default_repo_name(&self.workdir)?,
        };
        info!("Bootstrapping {} as \"{}\"", self.workdir, candidate);

        let bootstrapper = self.bootstrapper();
        bootstrapper.prepare().await?;

        let outcome = resolve_repo_name(candidate, remote, prompter, reporter).await?;
        debug!("Name resolution outcome: {:?}", outcome);

        let mut skip_initial_commit = args.skip_initial_commit;
        match &outcome {
            ResolutionOutcome::Aborted => {
                reporter.done("Program terminated.");
                return Ok(BootstrapOutcome::Aborted);
            }
            ResolutionOutcome::ReuseExisting(_) => {
                reporter.info("initial commit will be skipped, because repository already exists");
                skip_initial_commit = true;
            }
            ResolutionOutcome::UseName(_) => {}
        }

        let provisioned = provision(&outcome, remote, reporter).await?;

        bootstrapper.link_remote(&provisioned.descriptor).await?;
        let commit = bootstrapper.initial_commit(skip_initial_commit).await?;

        reporter.done("All done!");
        Ok(BootstrapOutcome::Completed(BootstrapReport {
            repository: provisioned.descriptor,
            created: provisioned.created,
            committed: commit == StepStatus::Applied,
        }))
    }
}

/// Repository name derived from the working directory's last component
pub fn default_repo_name(workdir: &Utf8Path) -> Result<String> {
    workdir
        .file_name()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            Error::configuration(format!(
                "cannot derive a repository name from {}; pass --repo-name",
                workdir
            ))
        })
}
