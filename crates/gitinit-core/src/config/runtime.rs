//! Runtime configuration types

use serde::{Deserialize, Serialize};

/// Complete runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeConfig {
    /// GitHub API settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Where the access token comes from
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Local git defaults
    #[serde(default)]
    pub git: GitWorkflowConfig,

    /// Package manifest initialization
    #[serde(default)]
    pub manifest: ManifestConfig,
}

/// GitHub API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitHubConfig {
    /// API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Page size for listing repositories (GitHub caps this at 100)
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Upper bound on pages fetched when listing repositories
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// User agent string for API requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            per_page: default_per_page(),
            max_pages: default_max_pages(),
            user_agent: default_user_agent(),
            http_timeout_secs: default_http_timeout(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}
fn default_per_page() -> u32 {
    100
}
fn default_max_pages() -> u32 {
    100
}
fn default_user_agent() -> String {
    format!("gitinit/{}", env!("CARGO_PKG_VERSION"))
}
fn default_http_timeout() -> u64 {
    60
}

/// Access token source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CredentialsConfig {
    /// Environment variable holding the path of the token file
    #[serde(default = "default_token_path_env")]
    pub token_path_env: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            token_path_env: default_token_path_env(),
        }
    }
}

fn default_token_path_env() -> String {
    "PRIVATE_KEY".to_string()
}

/// Local git defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitWorkflowConfig {
    /// Branch name passed to `git init --initial-branch`
    #[serde(default = "default_git_branch")]
    pub default_branch: String,

    /// Initial commit message
    #[serde(default = "default_initial_commit_message")]
    pub initial_commit_message: String,

    /// Name of the remote linked to the hosted repository
    #[serde(default = "default_origin_remote")]
    pub origin_remote: String,

    /// Ignore file written when missing
    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,
}

impl Default for GitWorkflowConfig {
    fn default() -> Self {
        Self {
            default_branch: default_git_branch(),
            initial_commit_message: default_initial_commit_message(),
            origin_remote: default_origin_remote(),
            ignore_file: default_ignore_file(),
        }
    }
}

fn default_git_branch() -> String {
    "main".to_string()
}
fn default_initial_commit_message() -> String {
    "Initial commit".to_string()
}
fn default_origin_remote() -> String {
    "origin".to_string()
}
fn default_ignore_file() -> String {
    ".gitignore".to_string()
}

/// Package manifest initialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ManifestConfig {
    /// Run the manifest command when the manifest file is missing
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Manifest file checked for existence
    #[serde(default = "default_manifest_file")]
    pub file: String,

    /// Command creating the manifest, as `[program, args...]`
    #[serde(default = "default_manifest_command")]
    pub command: Vec<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: default_manifest_file(),
            command: default_manifest_command(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_manifest_file() -> String {
    "package.json".to_string()
}
fn default_manifest_command() -> Vec<String> {
    vec!["npm".to_string(), "init".to_string(), "-y".to_string()]
}
