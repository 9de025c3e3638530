//! Error types for gitinit

use thiserror::Error;

/// Result type alias using gitinit-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a bootstrap run can end with
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or unusable configuration or credentials
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Internal consistency failure while resolving or provisioning the remote
    #[error("Repository conflict: {message}")]
    Conflict { message: String },

    /// A local command could not be spawned, exited nonzero, or wrote diagnostics
    #[error("`{command}` failed: {message}")]
    ExternalTool { command: String, message: String },

    /// The remote API could not be reached or its response could not be read
    #[error("Network error: {message}")]
    Network { message: String },

    /// The remote API answered with an error or an unusable payload
    #[error("Remote service error: {message}")]
    ExternalService { message: String },

    /// The bound remote descriptor has no ssh URL
    #[error("ssh_url not found for repository \"{name}\"")]
    MissingRemoteUrl { name: String },

    /// A prompt failed or produced an answer that does not fit the question
    #[error("Interaction failed: {message}")]
    Interaction { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an external tool error
    pub fn external_tool(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalTool {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create an external service error
    pub fn external_service(message: impl Into<String>) -> Self {
        Self::ExternalService {
            message: message.into(),
        }
    }

    /// Create a missing remote URL error
    pub fn missing_remote_url(name: impl Into<String>) -> Self {
        Self::MissingRemoteUrl { name: name.into() }
    }

    /// Create an interaction error
    pub fn interaction(message: impl Into<String>) -> Self {
        Self::Interaction {
            message: message.into(),
        }
    }

    /// Process exit code for this error
    ///
    /// Success and a user-chosen exit both use `0`, so every code here is nonzero.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration { .. } | Self::YamlParse(_) => 2,
            Self::Conflict { .. } => 3,
            Self::ExternalTool { .. } => 4,
            Self::Network { .. } | Self::ExternalService { .. } => 5,
            Self::MissingRemoteUrl { .. } => 6,
            Self::Interaction { .. } | Self::Io(_) => 1,
        }
    }
}
