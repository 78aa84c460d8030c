use crate::github::issues::{IssueResponse, NewIssueRef, RepoCoordinates};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "tasksplit";

/// Issue operations the split needs from the hosted tracker.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Opens a new issue and returns a reference to it.
    async fn create_issue(
        &self,
        repo: &RepoCoordinates,
        title: &str,
        body: &str,
    ) -> Result<NewIssueRef>;

    /// Replaces the body of an existing issue.
    async fn update_issue_body(
        &self,
        repo: &RepoCoordinates,
        number: u64,
        body: &str,
    ) -> Result<()>;
}

/// REST API client authenticated with a repository token.
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    message: Option<String>,
}

impl GitHubClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(GitHubClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn issues_url(&self, repo: &RepoCoordinates) -> String {
        format!("{}/repos/{}/{}/issues", self.base_url, repo.owner, repo.repo)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
    }
}

async fn error_for_status(response: reqwest::Response, action: &str) -> anyhow::Error {
    let status = response.status();
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(|body| body.message);
    match message {
        Some(message) => anyhow!("{action}: HTTP {status}: {message}"),
        None => anyhow!("{action}: HTTP {status}"),
    }
}

#[async_trait]
impl IssueTracker for GitHubClient {
    async fn create_issue(
        &self,
        repo: &RepoCoordinates,
        title: &str,
        body: &str,
    ) -> Result<NewIssueRef> {
        let response = self
            .request(reqwest::Method::POST, &self.issues_url(repo))
            .json(&serde_json::json!({ "title": title, "body": body }))
            .send()
            .await
            .with_context(|| format!("Failed to send create request for '{title}'"))?;

        if !response.status().is_success() {
            let action = format!("Failed to create issue '{title}'");
            return Err(error_for_status(response, &action).await);
        }

        let issue = response
            .json::<IssueResponse>()
            .await
            .context("Failed to parse created issue")?;
        Ok(issue.into())
    }

    async fn update_issue_body(
        &self,
        repo: &RepoCoordinates,
        number: u64,
        body: &str,
    ) -> Result<()> {
        let url = format!("{}/{number}", self.issues_url(repo));
        let response = self
            .request(reqwest::Method::PATCH, &url)
            .json(&serde_json::json!({ "body": body }))
            .send()
            .await
            .with_context(|| format!("Failed to send update request for issue #{number}"))?;

        if !response.status().is_success() {
            let action = format!("Failed to update issue #{number}");
            return Err(error_for_status(response, &action).await);
        }
        Ok(())
    }
}
