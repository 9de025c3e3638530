//! gitinit CLI - bootstrap a project and its GitHub repository
//!
//! This is the main entry point for the gitinit command-line interface.

mod cli;
mod commands;
mod output;
mod progress;
mod prompt;
mod reporter;

use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize rustls crypto provider (required for rustls 0.23+)
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let cli = Cli::parse_lenient();

    init_tracing(cli.verbose, cli.quiet);

    match commands::bootstrap::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Process exit code for a failed run
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<gitinit_core::Error>()
        .map(gitinit_core::Error::exit_code)
        .unwrap_or(1)
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        // User-facing progress goes through the reporter; logs are for -v
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_follows_error_kind() {
        let err = anyhow::Error::from(gitinit_core::Error::conflict("boom"));
        assert_eq!(exit_code(&err), 3);

        let err = anyhow::Error::from(gitinit_core::Error::configuration("no token"));
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_exit_code_sees_through_context() {
        let err: anyhow::Result<()> =
            Err(gitinit_core::Error::missing_remote_url("my-app")).context("linking remote");
        assert_eq!(exit_code(&err.unwrap_err()), 6);
    }

    #[test]
    fn test_exit_code_defaults_to_one() {
        assert_eq!(exit_code(&anyhow::anyhow!("unexpected")), 1);
    }
}
