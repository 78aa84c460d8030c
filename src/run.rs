use crate::config::Config;
use crate::context::{self, InvocationContext};
use crate::github::client::{GitHubClient, IssueTracker};
use crate::output;
use crate::split::{self, SplitOutcome};
use anyhow::{Context, Result};
use std::path::Path;

/// Name of the run output listing the created tracking issues.
pub const ISSUES_OUTPUT: &str = "issues";

pub async fn run(
    config: &Config,
    stdout_additional: Option<&mut dyn std::io::Write>,
) -> Result<SplitOutcome> {
    let client = GitHubClient::new(&config.api_url, &config.token)?;
    let ctx = context::load_invocation_context(config)?;
    run_with(&ctx, &client, config.output_path.as_deref(), stdout_additional).await
}

/// Runs the split against an explicit context and tracker, then reports
/// the outcome.
pub async fn run_with<T>(
    ctx: &InvocationContext,
    tracker: &T,
    output_path: Option<&Path>,
    mut stdout_additional: Option<&mut dyn std::io::Write>,
) -> Result<SplitOutcome>
where
    T: IssueTracker + ?Sized,
{
    let outcome = split::split_issue(ctx, tracker).await?;

    let created = match &outcome {
        SplitOutcome::NothingToDo { reason } => {
            output::println(&format!("Nothing to do: {reason}"), &mut stdout_additional)?;
            output::set_output(ISSUES_OUTPUT, "[]", output_path, &mut stdout_additional)?;
            return Ok(outcome);
        }
        SplitOutcome::Linked { created, failed } => {
            for issue in created {
                let line = format!(
                    "Created issue #{}: {} ({})",
                    issue.number, issue.title, issue.url
                );
                output::println(&line, &mut stdout_additional)?;
            }
            for failure in failed {
                eprintln!(
                    "Failed to create issue '{}': {}",
                    failure.title, failure.message
                );
            }
            if let Some(issue) = &ctx.issue {
                output::println(
                    &format!(
                        "Updated issue #{} with {} linked sub-tasks",
                        issue.number,
                        created.len()
                    ),
                    &mut stdout_additional,
                )?;
            }
            created
        }
    };

    let issues_json =
        serde_json::to_string(created).context("Failed to serialize created issues")?;
    output::set_output(
        ISSUES_OUTPUT,
        &issues_json,
        output_path,
        &mut stdout_additional,
    )?;
    Ok(outcome)
}
