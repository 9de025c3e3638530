//! Repository initialization

use super::runner::run_checked;
use camino::Utf8Path;
use gitinit_core::config::GitWorkflowConfig;
use gitinit_core::types::{CommandOutput, CommandSpec};
use gitinit_core::{CommandRunner, Result};
use tracing::{debug, info};

/// Run `git init` in `path` on the configured default branch
///
/// Passing `--initial-branch` keeps git from printing its default-branch hint,
/// which would otherwise count as diagnostic output.
pub async fn init_repository(
    runner: &dyn CommandRunner,
    path: &Utf8Path,
    git_config: &GitWorkflowConfig,
) -> Result<CommandOutput> {
    info!("Initializing git repository at: {}", path);

    let command = CommandSpec::new("git")
        .arg("init")
        .arg("--initial-branch")
        .arg(&git_config.default_branch);

    debug!("Running: git init with branch {}", git_config.default_branch);
    let output = run_checked(runner, path, &command).await?;

    info!("Repository initialized successfully");
    Ok(output)
}
