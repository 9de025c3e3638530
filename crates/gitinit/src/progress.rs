//! Spinner feedback around remote API calls

use crate::output;
use async_trait::async_trait;
use gitinit_core::types::{RemoteRepositoryDescriptor, RepositoryCatalog};
use gitinit_core::{RemoteRepoClient, Result};

/// Wraps a remote client and shows a spinner while each call is in flight
pub struct SpinnerClient<'a> {
    inner: &'a dyn RemoteRepoClient,
    quiet: bool,
}

impl<'a> SpinnerClient<'a> {
    pub fn new(inner: &'a dyn RemoteRepoClient, quiet: bool) -> Self {
        Self { inner, quiet }
    }
}

#[async_trait]
impl RemoteRepoClient for SpinnerClient<'_> {
    async fn list_repositories(&self) -> Result<RepositoryCatalog> {
        let pb = output::spinner("Fetching repositories...", self.quiet);
        let result = self.inner.list_repositories().await;
        pb.finish_and_clear();
        result
    }

    async fn create_repository(&self, name: &str) -> Result<RemoteRepositoryDescriptor> {
        let pb = output::spinner(&format!("Creating repository \"{}\"...", name), self.quiet);
        let result = self.inner.create_repository(name).await;
        pb.finish_and_clear();
        result
    }
}
