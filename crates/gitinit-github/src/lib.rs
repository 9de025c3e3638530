//! # gitinit-github
//!
//! GitHub REST client used by gitinit to list the authenticated user's
//! repositories and to create new ones.
//!
//! ```no_run
//! use gitinit_core::config::{AccessToken, GitHubConfig};
//! use gitinit_core::RemoteRepoClient;
//! use gitinit_github::GitHubClient;
//!
//! # async fn example() -> gitinit_core::Result<()> {
//! let token = AccessToken::new("ghp_example")?;
//! let client = GitHubClient::new(&GitHubConfig::default(), token)?;
//! let catalog = client.list_repositories().await?;
//! println!("{} repositories", catalog.len());
//! # Ok(())
//! # }
//! ```

mod client;

pub use client::GitHubClient;
