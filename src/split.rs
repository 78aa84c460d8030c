use crate::checklist;
use crate::context::InvocationContext;
use crate::github::client::IssueTracker;
use crate::github::issues::{NewIssueRef, RepoCoordinates};
use anyhow::{Result, anyhow};
use futures::future::join_all;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The run was not triggered from an issue.
    MissingTriggerContext,
    /// The issue body holds no `- [ ]` lines.
    NoUncheckedItems,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingTriggerContext => write!(f, "no triggering issue"),
            SkipReason::NoUncheckedItems => write!(f, "no unchecked items"),
        }
    }
}

/// A sub-task whose tracking issue could not be created.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationFailure {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutcome {
    NothingToDo {
        reason: SkipReason,
    },
    Linked {
        created: Vec<NewIssueRef>,
        failed: Vec<CreationFailure>,
    },
}

/// Body given to each tracking issue.
pub fn tracking_issue_body(parent_number: u64) -> String {
    format!("Sub-task of #{parent_number}")
}

/// Creates one issue per title concurrently and waits for all of them.
///
/// Results are returned in title order. A failure does not cancel its
/// siblings.
pub async fn create_tracking_issues<T>(
    tracker: &T,
    repo: &RepoCoordinates,
    titles: &[String],
    body: &str,
) -> (Vec<NewIssueRef>, Vec<CreationFailure>)
where
    T: IssueTracker + ?Sized,
{
    let results = join_all(
        titles
            .iter()
            .map(|title| tracker.create_issue(repo, title, body)),
    )
    .await;

    titles.iter().zip(results).fold(
        (Vec::new(), Vec::new()),
        |(mut created, mut failed), (title, result)| {
            match result {
                Ok(issue) => {
                    tracing::info!(
                        number = issue.number,
                        url = %issue.url,
                        "created tracking issue"
                    );
                    created.push(issue);
                }
                Err(err) => {
                    tracing::warn!(
                        title = %title,
                        error = %err,
                        "failed to create tracking issue"
                    );
                    failed.push(CreationFailure {
                        title: title.clone(),
                        message: format!("{err:#}"),
                    });
                }
            }
            (created, failed)
        },
    )
}

/// Splits the triggering issue's checklist into tracking issues and links
/// them back into its body.
///
/// Returns early with [`SplitOutcome::NothingToDo`] when there is no issue
/// or no unchecked item; nothing is created or updated then. Creation
/// failures are tolerated as long as at least one issue was created; the
/// body update itself must succeed.
pub async fn split_issue<T>(ctx: &InvocationContext, tracker: &T) -> Result<SplitOutcome>
where
    T: IssueTracker + ?Sized,
{
    let Some(issue) = &ctx.issue else {
        tracing::info!("no triggering issue, nothing to do");
        return Ok(SplitOutcome::NothingToDo {
            reason: SkipReason::MissingTriggerContext,
        });
    };

    let titles = checklist::extract_unchecked_items(issue.body.as_deref());
    if titles.is_empty() {
        tracing::info!(issue = issue.number, "no unchecked items, nothing to do");
        return Ok(SplitOutcome::NothingToDo {
            reason: SkipReason::NoUncheckedItems,
        });
    }

    let body = tracking_issue_body(issue.number);
    let (created, failed) = create_tracking_issues(tracker, &ctx.repo, &titles, &body).await;

    if created.is_empty() {
        let details = failed
            .iter()
            .map(|failure| format!("'{}': {}", failure.title, failure.message))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(anyhow!(
            "Failed to create any of {} tracking issues: {details}",
            titles.len()
        ));
    }

    let original = issue.body.as_deref().unwrap_or_default();
    let new_body = checklist::rewrite_body(original, &created);
    tracker
        .update_issue_body(&ctx.repo, issue.number, &new_body)
        .await?;
    tracing::info!(
        issue = issue.number,
        linked = created.len(),
        "updated issue body"
    );

    Ok(SplitOutcome::Linked { created, failed })
}
