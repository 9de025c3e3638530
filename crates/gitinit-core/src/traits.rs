//! Collaborator traits
//!
//! The bootstrap components only talk to the outside world through these
//! traits, so each one can be replaced by a fake in tests.

use crate::error::Result;
use crate::types::{
    CommandOutput, CommandSpec, LogLevel, Prompt, PromptAnswer, RemoteRepositoryDescriptor,
    RepositoryCatalog,
};
use async_trait::async_trait;
use camino::Utf8Path;

/// Runs external commands (git, npm)
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` in `cwd` and capture its output
    ///
    /// Returns `Err` only when the process could not be run at all; a nonzero
    /// exit is reported through [`CommandOutput::exit_code`].
    async fn run(&self, cwd: &Utf8Path, command: &CommandSpec) -> Result<CommandOutput>;
}

/// Repository operations on the hosting platform
#[async_trait]
pub trait RemoteRepoClient: Send + Sync {
    /// List every repository owned by the authenticated user
    async fn list_repositories(&self) -> Result<RepositoryCatalog>;

    /// Create a public repository with empty description and homepage
    async fn create_repository(&self, name: &str) -> Result<RemoteRepositoryDescriptor>;
}

/// Asks the user a question and blocks until it is answered
pub trait InteractionPrompter: Send + Sync {
    fn ask(&self, prompt: &Prompt) -> Result<PromptAnswer>;
}

/// Leveled user-facing output
pub trait Reporter: Send + Sync {
    fn report(&self, level: LogLevel, message: &str);

    fn done(&self, message: &str) {
        self.report(LogLevel::Done, message);
    }

    fn info(&self, message: &str) {
        self.report(LogLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.report(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(LogLevel::Error, message);
    }
}
