//! Initial commit

use super::runner::run_checked;
use camino::Utf8Path;
use gitinit_core::types::{CommandOutput, CommandSpec};
use gitinit_core::{CommandRunner, Result};
use tracing::{debug, info};

/// Stage every file and commit with `message`
///
/// Returns the output of `git commit`. Either command exiting nonzero or
/// writing to stderr fails the step.
pub async fn create_initial_commit(
    runner: &dyn CommandRunner,
    path: &Utf8Path,
    message: &str,
) -> Result<CommandOutput> {
    debug!("Creating initial commit");

    run_checked(runner, path, &CommandSpec::new("git").args(["add", "-A"])).await?;

    let output = run_checked(
        runner,
        path,
        &CommandSpec::new("git").args(["commit", "-m", message]),
    )
    .await?;

    info!("Initial commit created");
    Ok(output)
}
