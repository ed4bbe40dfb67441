//! Issue identifier extraction from pull-request branch names
//!
//! Linear generates branch names shaped like `feature/eng-1038-short-title`:
//! a fixed prefix, the team key, the issue number, then free-form words.
//! Only that shape is recognized; other naming conventions need code changes
//! here rather than a user-supplied pattern.

use crate::types::{parse_issue_number, IssueId};

/// Prefix every recognized branch name starts with
pub const BRANCH_PREFIX: &str = "feature/";

/// Extract the Linear issue identifier from a branch name.
///
/// Total over all inputs: any branch that does not match
/// `feature/<team>-<number>[-...]` yields `None`.
///
/// ```
/// use linear_automation_core::extract_issue_id;
///
/// let id = extract_issue_id("feature/teamA-1038-my-issue-branch").unwrap();
/// assert_eq!(id.to_string(), "TEAMA-1038");
///
/// assert!(extract_issue_id("feature/my-issue-branch-issue-id-1234").is_none());
/// ```
pub fn extract_issue_id(branch: &str) -> Option<IssueId> {
    let rest = branch.strip_prefix(BRANCH_PREFIX)?;
    let mut tokens = rest.split('-');

    let team = tokens.next()?;
    let number = parse_issue_number(tokens.next()?)?;

    IssueId::new(team, number)
}
