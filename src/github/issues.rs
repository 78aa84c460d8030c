use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Owner and name of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinates {
    pub owner: String,
    pub repo: String,
}

impl RepoCoordinates {
    /// Parses an `owner/repo` string as found in `GITHUB_REPOSITORY`.
    pub fn parse(full_name: &str) -> Result<Self> {
        let parts: Vec<&str> = full_name.trim().split('/').collect();
        match parts.as_slice() {
            [owner, repo] if !owner.is_empty() && !repo.is_empty() => Ok(RepoCoordinates {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            _ => Err(anyhow!(
                "Invalid repository format '{full_name}'. Expected <owner>/<repo>."
            )),
        }
    }
}

impl std::fmt::Display for RepoCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// The issue whose event started this run.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggeringIssue {
    pub number: u64,
    pub body: Option<String>,
}

/// A tracking issue freshly created for one sub-task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewIssueRef {
    pub number: u64,
    pub title: String,
    /// Browser link (`html_url`), not the API resource URL.
    pub url: String,
}

/// Subset of the REST issue resource returned by create/update calls.
#[derive(Deserialize, Debug)]
pub struct IssueResponse {
    pub number: u64,
    pub title: String,
    pub html_url: String,
}

impl From<IssueResponse> for NewIssueRef {
    fn from(issue: IssueResponse) -> Self {
        NewIssueRef {
            number: issue.number,
            title: issue.title,
            url: issue.html_url,
        }
    }
}
