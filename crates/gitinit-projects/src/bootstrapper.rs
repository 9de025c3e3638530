//! Local repository setup
//!
//! Each step checks whether its result already exists and skips itself if so,
//! which keeps a second run over the same directory harmless:
//! 1. git metadata (`git init`)
//! 2. package manifest (`npm init -y`)
//! 3. ignore file
//! 4. `origin` remote pointing at the hosted repository
//! 5. initial commit

use crate::git;
use camino::{Utf8Path, Utf8PathBuf};
use gitinit_core::config::{GitWorkflowConfig, ManifestConfig};
use gitinit_core::types::{CommandOutput, CommandSpec, RemoteRepositoryDescriptor};
use gitinit_core::{CommandRunner, Error, Reporter, Result};
use tracing::debug;

/// Ignore rules written when the project has no ignore file
pub const DEFAULT_GITIGNORE: &str = include_str!("templates/default.gitignore");

/// Whether a step did its work or found it already done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Applied,
    Skipped,
}

/// Runs the local setup steps in a working directory
pub struct LocalRepoBootstrapper<'a> {
    workdir: &'a Utf8Path,
    runner: &'a dyn CommandRunner,
    reporter: &'a dyn Reporter,
    git: &'a GitWorkflowConfig,
    manifest: &'a ManifestConfig,
}

impl<'a> LocalRepoBootstrapper<'a> {
    pub fn new(
        workdir: &'a Utf8Path,
        runner: &'a dyn CommandRunner,
        reporter: &'a dyn Reporter,
        git: &'a GitWorkflowConfig,
        manifest: &'a ManifestConfig,
    ) -> Self {
        Self {
            workdir,
            runner,
            reporter,
            git,
            manifest,
        }
    }

    /// Steps 1-3: git metadata, manifest, ignore file
    pub async fn prepare(&self) -> Result<()> {
        self.ensure_repository().await?;
        self.ensure_manifest().await?;
        self.ensure_ignore_file().await?;
        Ok(())
    }

    /// Step 1: run `git init` unless `.git` exists
    pub async fn ensure_repository(&self) -> Result<StepStatus> {
        if self.workdir.join(".git").exists() {
            self.reporter.warning("Already a Git repository!");
            return Ok(StepStatus::Skipped);
        }

        let output = git::init_repository(self.runner, self.workdir, self.git).await?;
        self.report_done(&output, "Git repository initialized");
        Ok(StepStatus::Applied)
    }

    /// Step 2: run the manifest command unless the manifest exists
    pub async fn ensure_manifest(&self) -> Result<StepStatus> {
        if !self.manifest.enabled {
            debug!("Manifest initialization disabled");
            return Ok(StepStatus::Skipped);
        }

        let manifest_path = self.workdir.join(&self.manifest.file);
        if manifest_path.exists() {
            self.reporter
                .warning(&format!("{} already exists", manifest_path));
            return Ok(StepStatus::Skipped);
        }

        let command = CommandSpec::from_argv(&self.manifest.command).ok_or_else(|| {
            Error::configuration("manifest.command must name a program")
        })?;

        let output = git::run_checked(self.runner, self.workdir, &command).await?;
        self.report_done(&output, &format!("{} created", manifest_path));
        Ok(StepStatus::Applied)
    }

    /// Step 3: write [`DEFAULT_GITIGNORE`] unless the ignore file exists
    pub async fn ensure_ignore_file(&self) -> Result<StepStatus> {
        let ignore_path = self.ignore_file_path();
        if ignore_path.exists() {
            self.reporter.warning(&format!("{} already exists", ignore_path));
            return Ok(StepStatus::Skipped);
        }

        tokio::fs::write(&ignore_path, DEFAULT_GITIGNORE).await?;
        self.reporter.done(&format!("{} created", ignore_path));
        Ok(StepStatus::Applied)
    }

    /// Step 4: point the origin remote at the descriptor's ssh URL
    ///
    /// Fails with `MissingRemoteUrl` before touching git when the descriptor
    /// has no ssh URL. An origin already set to the same URL is left alone.
    pub async fn link_remote(&self, descriptor: &RemoteRepositoryDescriptor) -> Result<StepStatus> {
        let ssh_url = descriptor
            .ssh_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::missing_remote_url(&descriptor.name))?;

        let remote = &self.git.origin_remote;
        if let Some(existing) = git::get_remote_url(self.runner, self.workdir, remote).await? {
            if existing == ssh_url {
                self.reporter
                    .info(&format!("remote \"{}\" already points to {}", remote, ssh_url));
                return Ok(StepStatus::Skipped);
            }
            debug!("Remote '{}' already points to {}", remote, existing);
        }

        git::add_remote(self.runner, self.workdir, remote, ssh_url).await?;
        self.reporter.done("remote for repository added");
        Ok(StepStatus::Applied)
    }

    /// Step 5: stage everything and commit, unless `skip` is set
    pub async fn initial_commit(&self, skip: bool) -> Result<StepStatus> {
        if skip {
            self.reporter.info("initial commit skipped");
            return Ok(StepStatus::Skipped);
        }

        let output = git::create_initial_commit(
            self.runner,
            self.workdir,
            &self.git.initial_commit_message,
        )
        .await?;
        self.report_done(&output, "Initial commit created");
        Ok(StepStatus::Applied)
    }

    fn ignore_file_path(&self) -> Utf8PathBuf {
        self.workdir.join(&self.git.ignore_file)
    }

    fn report_done(&self, output: &CommandOutput, fallback: &str) {
        self.reporter.done(output.first_line().unwrap_or(fallback));
    }
}
