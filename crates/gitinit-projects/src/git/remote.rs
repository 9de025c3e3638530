//! Git remote management

use super::runner::run_checked;
use camino::Utf8Path;
use gitinit_core::types::{CommandOutput, CommandSpec};
use gitinit_core::{CommandRunner, Result};
use tracing::{debug, info};

/// Add a remote to a repository
///
/// # Errors
/// Returns `ExternalTool` if git exits nonzero or prints diagnostics
/// (for instance when the remote already exists).
pub async fn add_remote(
    runner: &dyn CommandRunner,
    path: &Utf8Path,
    name: &str,
    url: &str,
) -> Result<CommandOutput> {
    info!("Adding remote '{}': {}", name, url);

    let command = CommandSpec::new("git").args(["remote", "add", name, url]);
    let output = run_checked(runner, path, &command).await?;

    info!("Remote '{}' added successfully", name);
    Ok(output)
}

/// Get the URL of a remote, `None` if it is not configured
pub async fn get_remote_url(
    runner: &dyn CommandRunner,
    path: &Utf8Path,
    name: &str,
) -> Result<Option<String>> {
    debug!("Getting URL for remote: {}", name);

    let command = CommandSpec::new("git").args(["remote", "get-url", name]);
    let output = runner.run(path, &command).await?;

    if !output.success() {
        return Ok(None);
    }

    let url = output.stdout.trim();
    Ok((!url.is_empty()).then(|| url.to_string()))
}
