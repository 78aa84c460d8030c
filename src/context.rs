use crate::config::Config;
use crate::github::issues::{RepoCoordinates, TriggeringIssue};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

/// Everything a run needs to know about the event that triggered it.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationContext {
    pub repo: RepoCoordinates,
    /// `None` when the run was not triggered from an issue.
    pub issue: Option<TriggeringIssue>,
}

#[derive(Deserialize, Debug)]
struct EventPayload {
    issue: Option<IssuePayload>,
}

#[derive(Deserialize, Debug)]
struct IssuePayload {
    number: u64,
    body: Option<String>,
}

impl InvocationContext {
    /// Builds a context from a webhook event payload.
    pub fn from_event_json(repo: RepoCoordinates, payload: &str) -> Result<Self> {
        let event: EventPayload =
            serde_json::from_str(payload).context("Failed to parse event payload")?;
        Ok(InvocationContext {
            repo,
            issue: event.issue.map(|issue| TriggeringIssue {
                number: issue.number,
                body: issue.body,
            }),
        })
    }
}

/// Reads the event payload file named by the configuration.
pub fn load_invocation_context(config: &Config) -> Result<InvocationContext> {
    let repo = RepoCoordinates::parse(&config.repository)?;
    let payload = fs::read_to_string(&config.event_path).with_context(|| {
        format!(
            "Failed to read event payload {}",
            config.event_path.display()
        )
    })?;
    InvocationContext::from_event_json(repo, &payload)
}
