//! GitHub repositories API

use async_trait::async_trait;
use gitinit_core::config::{AccessToken, GitHubConfig};
use gitinit_core::types::{RemoteRepositoryDescriptor, RepositoryCatalog};
use gitinit_core::{Error, RemoteRepoClient, Result};
use reqwest::header::ACCEPT;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info, warn};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Repository fields returned by the API
///
/// Every field is optional so a malformed payload is reported as a service
/// error instead of a decoding failure.
#[derive(Debug, Deserialize)]
struct RepositoryPayload {
    name: Option<String>,
    ssh_url: Option<String>,
    html_url: Option<String>,
}

impl RepositoryPayload {
    fn into_descriptor(self) -> Option<RemoteRepositoryDescriptor> {
        let name = self.name.filter(|name| !name.is_empty())?;
        Some(RemoteRepositoryDescriptor {
            name,
            ssh_url: self.ssh_url,
            html_url: self.html_url,
        })
    }
}

/// Error body returned by the API
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

impl ApiErrorBody {
    /// `message` plus any nested `errors[].message`
    fn describe(&self) -> String {
        let details: Vec<&str> = self
            .errors
            .iter()
            .filter_map(|e| e.get("message").and_then(|m| m.as_str()))
            .collect();

        if details.is_empty() {
            self.message.clone()
        } else {
            format!("{} ({})", self.message, details.join("; "))
        }
    }
}

/// Authenticated GitHub client
pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
    token: AccessToken,
    per_page: u32,
    max_pages: u32,
}

impl GitHubClient {
    /// Create a client from configuration and an access token
    pub fn new(config: &GitHubConfig, token: AccessToken) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token,
            per_page: config.per_page.max(1),
            max_pages: config.max_pages.max(1),
        })
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(self.token.expose())
            .header(ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .bearer_auth(self.token.expose())
            .header(ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
    }

    /// Fetch one page of `GET /user/repos`, restricted to repositories the user owns
    async fn list_page(&self, page: u32) -> Result<Vec<RepositoryPayload>> {
        let url = format!(
            "{}/user/repos?type=owner&per_page={}&page={}",
            self.api_url, self.per_page, page
        );

        debug!("Fetching repositories from: {}", url);

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::network(format!("Failed to list repositories: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = read_error_body(response).await;
            return Err(Error::external_service(format!(
                "Failed to list repositories ({}): {}",
                status,
                body.describe()
            )));
        }

        read_json(response, "repository list").await
    }
}

#[async_trait]
impl RemoteRepoClient for GitHubClient {
    async fn list_repositories(&self) -> Result<RepositoryCatalog> {
        let mut catalog = RepositoryCatalog::default();

        for page in 1..=self.max_pages {
            let items = self.list_page(page).await?;
            let count = items.len();

            let descriptors = items
                .into_iter()
                .map(|item| {
                    item.into_descriptor().ok_or_else(|| {
                        Error::external_service("repository list entry has no name")
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            catalog.extend(descriptors);

            if count < self.per_page as usize {
                debug!("Fetched {} repositories in {} page(s)", catalog.len(), page);
                return Ok(catalog);
            }
        }

        warn!(
            "Stopped listing repositories after {} pages; results may be incomplete",
            self.max_pages
        );
        Ok(catalog)
    }

    async fn create_repository(&self, name: &str) -> Result<RemoteRepositoryDescriptor> {
        let url = format!("{}/user/repos", self.api_url);
        info!("Creating repository: {}", name);

        let body = json!({
            "name": name,
            "description": "",
            "homepage": "",
            "private": false,
        });

        let response = self
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::network(format!("Failed to create repository: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error = read_error_body(response).await;
            let detail = error.describe();

            if status == StatusCode::UNPROCESSABLE_ENTITY && detail.contains("already exists") {
                return Err(Error::conflict(format!(
                    "repository \"{}\" was created by someone else in the meantime: {}",
                    name, detail
                )));
            }

            return Err(Error::external_service(format!(
                "Failed to create repository \"{}\" ({}): {}",
                name, status, detail
            )));
        }

        let payload: RepositoryPayload = read_json(response, "create repository").await?;
        payload.into_descriptor().ok_or_else(|| {
            Error::external_service(format!(
                "create repository response for \"{}\" has no repository",
                name
            ))
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let text = response
        .text()
        .await
        .map_err(|e| Error::network(format!("Failed to read {} response: {}", what, e)))?;

    serde_json::from_str(&text)
        .map_err(|e| Error::external_service(format!("Unusable {} response: {}", what, e)))
}

async fn read_error_body(response: Response) -> ApiErrorBody {
    response
        .text()
        .await
        .ok()
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default()
}
