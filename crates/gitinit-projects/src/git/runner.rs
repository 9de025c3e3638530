//! Process-backed command runner

use async_trait::async_trait;
use camino::Utf8Path;
use gitinit_core::types::{CommandOutput, CommandSpec};
use gitinit_core::{CommandRunner, Error, Result};
use tokio::process::Command;
use tracing::debug;

/// Runs commands as child processes and captures their output
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, cwd: &Utf8Path, command: &CommandSpec) -> Result<CommandOutput> {
        debug!("Running: {} (in {})", command, cwd);

        let output = Command::new(&command.program)
            .current_dir(cwd)
            .args(&command.args)
            .output()
            .await
            .map_err(|e| Error::external_tool(command.to_string(), e.to_string()))?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}

/// Run a command that must exit 0 without writing to stderr
pub async fn run_checked(
    runner: &dyn CommandRunner,
    cwd: &Utf8Path,
    command: &CommandSpec,
) -> Result<CommandOutput> {
    let output = runner.run(cwd, command).await?;

    if !output.success() {
        let reason = if output.has_diagnostics() {
            output.stderr.trim().to_string()
        } else {
            match output.exit_code {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            }
        };
        return Err(Error::external_tool(command.to_string(), reason));
    }

    if output.has_diagnostics() {
        return Err(Error::external_tool(
            command.to_string(),
            output.stderr.trim().to_string(),
        ));
    }

    Ok(output)
}
