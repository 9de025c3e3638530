//! Values passed between the bootstrap components

use serde::{Deserialize, Serialize};
use std::fmt;

/// Arguments for a single bootstrap run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapArguments {
    /// Remote repository name; the working directory name is used when absent
    pub repo_name: Option<String>,

    /// Skip staging and committing the project files
    pub skip_initial_commit: bool,
}

/// A repository on the hosting platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepositoryDescriptor {
    /// Repository name (unique per owner)
    pub name: String,

    /// SSH clone URL
    #[serde(default)]
    pub ssh_url: Option<String>,

    /// Web page URL
    #[serde(default)]
    pub html_url: Option<String>,
}

impl RemoteRepositoryDescriptor {
    /// Create a descriptor with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ssh_url: None,
            html_url: None,
        }
    }

    /// Set the ssh URL
    pub fn with_ssh_url(mut self, url: impl Into<String>) -> Self {
        self.ssh_url = Some(url.into());
        self
    }

    /// Set the web page URL
    pub fn with_html_url(mut self, url: impl Into<String>) -> Self {
        self.html_url = Some(url.into());
        self
    }
}

/// Repositories owned by the authenticated user, in API order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryCatalog {
    repositories: Vec<RemoteRepositoryDescriptor>,
}

impl RepositoryCatalog {
    /// Create a catalog from descriptors
    pub fn new(repositories: Vec<RemoteRepositoryDescriptor>) -> Self {
        Self { repositories }
    }

    /// Find a repository by name, ignoring ASCII case as GitHub does
    pub fn find(&self, name: &str) -> Option<&RemoteRepositoryDescriptor> {
        self.repositories
            .iter()
            .find(|repo| repo.name.eq_ignore_ascii_case(name))
    }

    /// Check whether a repository with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Iterate over the descriptors
    pub fn iter(&self) -> impl Iterator<Item = &RemoteRepositoryDescriptor> {
        self.repositories.iter()
    }

    /// Append another page of results
    pub fn extend(&mut self, page: impl IntoIterator<Item = RemoteRepositoryDescriptor>) {
        self.repositories.extend(page);
    }
}

impl FromIterator<RemoteRepositoryDescriptor> for RepositoryCatalog {
    fn from_iter<I: IntoIterator<Item = RemoteRepositoryDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Result of resolving the remote repository name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Create (or use) a repository with this name
    UseName(String),

    /// Link to an existing repository; no creation, no initial commit
    ReuseExisting(RemoteRepositoryDescriptor),

    /// The user chose to stop the run
    Aborted,
}

/// An external command: program plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Build from a `[program, args...]` list, as stored in configuration
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone()).args(args.iter().cloned()))
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Captured result of running a command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// Output of a command that exited 0 and printed `stdout`
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: Some(0),
        }
    }

    /// Output of a command that exited with `code` and printed `stderr`
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            exit_code: Some(code),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Whether the command wrote anything to stderr
    pub fn has_diagnostics(&self) -> bool {
        !self.stderr.trim().is_empty()
    }

    /// First non-empty line of stdout
    pub fn first_line(&self) -> Option<&str> {
        self.stdout.lines().map(str::trim).find(|line| !line.is_empty())
    }
}

/// Level of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Done,
    Info,
    Warning,
    Error,
}

/// A question put to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Pick one of `options`
    Choice {
        message: String,
        options: Vec<String>,
    },
    /// Type a value
    Text { message: String },
}

/// The user's answer to a [`Prompt`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAnswer {
    /// Index into the offered options
    Choice(usize),
    Text(String),
}
