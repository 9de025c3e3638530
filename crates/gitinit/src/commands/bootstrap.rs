//! Bootstrap command: local repository, GitHub repository, remote, commit

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use gitinit_core::{ConfigLoader, Error};
use gitinit_github::GitHubClient;
use gitinit_projects::git::ProcessRunner;
use gitinit_projects::orchestrator::preflight;
use gitinit_projects::{BootstrapOutcome, Collaborators, Orchestrator};
use tracing::debug;

use crate::cli::Cli;
use crate::output;
use crate::progress::SpinnerClient;
use crate::prompt::DialoguerPrompter;
use crate::reporter::ConsoleReporter;

pub async fn run(cli: Cli) -> Result<()> {
    if !cli.quiet {
        output::header("gitinit");
    }

    for flag in &cli.extra_flags {
        debug!("Ignoring unrecognized flag --{}", flag);
    }

    let loader = match &cli.config_dir {
        Some(dir) => ConfigLoader::with_dir(dir.clone()),
        None => ConfigLoader::new()?,
    };
    let config = loader
        .load()
        .with_context(|| format!("Failed to load configuration from {}", loader.config_dir()))?;

    // Credentials are checked before anything touches the working directory
    let token = preflight(&config, loader.config_dir())?;

    let workdir = std::env::current_dir()
        .map_err(Error::from)
        .and_then(|dir| {
            Utf8PathBuf::from_path_buf(dir).map_err(|dir| {
                Error::configuration(format!(
                    "working directory {} is not valid UTF-8",
                    dir.display()
                ))
            })
        })?;
    debug!("Working directory: {}", workdir);

    let github = GitHubClient::new(&config.github, token)?;
    let remote = SpinnerClient::new(&github, cli.quiet);
    let runner = ProcessRunner::new();
    let prompter = DialoguerPrompter::new();
    let reporter = ConsoleReporter::new(cli.quiet);

    let collaborators = Collaborators {
        runner: &runner,
        remote: &remote,
        prompter: &prompter,
        reporter: &reporter,
    };
    let outcome = Orchestrator::new(workdir, &config, collaborators)
        .run(&cli.to_arguments())
        .await?;

    if let BootstrapOutcome::Completed(report) = outcome {
        if !cli.quiet {
            if let Some(url) = &report.repository.html_url {
                output::kv("Repository", url);
            }
        }
    }

    Ok(())
}
