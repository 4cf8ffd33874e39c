//! HTTP client for the commit-listing API.

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::models::{Commit, RepoRef};
use crate::domain::ports::{CommitClient, FetchOutcome};

use super::types::CommitEnvelope;

/// Page-size cap on the commit listing.
const PER_PAGE: u32 = 15;

/// Configuration for the commit-listing client.
#[derive(Debug, Clone)]
pub struct GithubClientConfig {
    /// Personal access token. Absence is not validated up front; requests
    /// without one simply fail upstream and degrade.
    pub token: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GithubClientConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: "https://api.github.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Commit fetcher with a deliberate swallow-and-degrade policy: every
/// transport or status failure becomes [`FetchOutcome::Unavailable`], never
/// an error. No retries, no caching.
pub struct GithubCommitClient {
    http_client: ReqwestClient,
    config: GithubClientConfig,
}

impl GithubCommitClient {
    pub fn new(config: GithubClientConfig) -> Result<Self, reqwest::Error> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .user_agent("jamkeeper")
            .build()?;

        Ok(Self { http_client, config })
    }

    async fn list_commits(&self, repo: &RepoRef) -> Result<Vec<Commit>, FetchFailure> {
        let url = format!(
            "{}/repos/{}/{}/commits?per_page={PER_PAGE}",
            self.config.base_url, repo.owner, repo.name
        );

        debug!("GET {url}");

        let mut request = self.http_client.get(&url);
        if let Some(token) = &self.config.token {
            request = request.header("Authorization", format!("token {token}"));
        }

        let response = request.send().await.map_err(|e| FetchFailure {
            status: None,
            detail: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure {
                status: Some(status.as_u16()),
                detail: format!("commit listing returned {status}"),
            });
        }

        let envelopes: Vec<CommitEnvelope> = response.json().await.map_err(|e| FetchFailure {
            status: Some(status.as_u16()),
            detail: format!("invalid commit listing body: {e}"),
        })?;

        Ok(envelopes.into_iter().map(Commit::from).collect())
    }
}

struct FetchFailure {
    status: Option<u16>,
    detail: String,
}

#[async_trait]
impl CommitClient for GithubCommitClient {
    async fn fetch_commits(&self, repo: &RepoRef) -> FetchOutcome {
        match self.list_commits(repo).await {
            Ok(commits) => FetchOutcome::Commits(commits),
            Err(failure) => {
                warn!(
                    repo = %repo,
                    status = ?failure.status,
                    "commit fetch failed, degrading to empty: {}",
                    failure.detail
                );
                FetchOutcome::Unavailable { status: failure.status }
            }
        }
    }
}
