use crate::github::issues::NewIssueRef;
use regex::Regex;
use std::sync::LazyLock;

/// Unchecked task line; the label runs to end of line and excludes a `\r`.
static UNCHECKED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^- \[ \] (.+)$").expect("valid checklist pattern"));

/// Unchecked task line including its terminating newline. A final line
/// without `\n` does not match and survives the strip.
static UNCHECKED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^- \[ \] .+\n").expect("valid checklist pattern"));

/// Returns the labels of every `- [ ] <label>` line, in order.
///
/// An absent or empty body yields no labels. Labels are captured verbatim
/// up to end of line; duplicates are kept.
pub fn extract_unchecked_items(body: Option<&str>) -> Vec<String> {
    let items: Vec<String> = body
        .map(|text| {
            UNCHECKED_ITEM
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|label| label.as_str().to_string())
                .collect()
        })
        .unwrap_or_default();

    tracing::debug!(?items, "extracted unchecked items");
    items
}

/// Renders one `- [ ] [title](url)` line per issue, joined by `\n`.
pub fn render_checklist(new_issues: &[NewIssueRef]) -> String {
    new_issues
        .iter()
        .map(|issue| format!("- [ ] [{}]({})", issue.title, issue.url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drops newline-terminated unchecked lines from `original` and appends a
/// checklist linking to `new_issues`, separated by a blank line.
///
/// The two steps are independent: nothing checks that the number of
/// removed lines matches the number of new issues.
pub fn rewrite_body(original: &str, new_issues: &[NewIssueRef]) -> String {
    let stripped = UNCHECKED_LINE.replace_all(original, "");
    format!("{stripped}\n\n{}", render_checklist(new_issues))
}
