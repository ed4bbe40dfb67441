//! Action entry point: inputs → branch → issue id → comment → outputs

use crate::branch::BranchSource;
use crate::error::{Error, Result};
use crate::extract::extract_issue_id;
use crate::inputs::{names, ActionInputs, Environment};
use crate::traits::{ActionHost, CommentPublisher};
use crate::types::{ActionOutputs, ApiKey};

/// Terminal state of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RunStatus {
    /// Outputs were set
    Success,
    /// `set_failed` was reported
    Failure,
}

impl RunStatus {
    /// `true` for [`RunStatus::Success`]
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, RunStatus::Success)
    }
}

/// Resolve everything and, outside self-test mode, post the comment.
///
/// `connect` builds the publisher from the API key; it is only called when a
/// comment is actually going to be posted. Nothing is reported to `host`
/// except the secret mask registered right before connecting.
pub async fn execute<E, H, P, F>(
    inputs: &ActionInputs<E>,
    host: &mut H,
    connect: F,
) -> Result<ActionOutputs>
where
    E: Environment,
    H: ActionHost,
    P: CommentPublisher,
    F: FnOnce(&ApiKey) -> Result<P>,
{
    let self_test = inputs.flag(names::PERFORM_TEST_RUN);

    let api_key = ApiKey::new(inputs.required(names::LINEAR_API_KEY)?);
    let comment_text = inputs.required(names::LINEAR_COMMENT_TEXT)?;

    let branch = BranchSource::for_mode(self_test)
        .resolve(inputs)?
        .ok_or(Error::BranchName)?;

    let Some(issue_id) = extract_issue_id(&branch) else {
        tracing::info!(branch = %branch, "branch name does not match feature/<team>-<number>");
        return Err(Error::Extraction);
    };

    // Only the branch and the id derived from it are logged here, never inputs
    if self_test {
        tracing::info!("=== TEST RUN ===");
        tracing::info!("=> PR_BRANCH_NAME={}", branch);
        tracing::info!("=> LINEAR_ISSUE_ID={}", issue_id);
        return Ok(ActionOutputs::empty());
    }

    host.mask(api_key.expose())?;
    let publisher = connect(&api_key)?;
    let posted = publisher.post(&issue_id, &comment_text).await?;

    tracing::info!(comment = %posted.comment_id, issue = %posted.issue_id, "comment posted");
    Ok(posted.into())
}

/// Run the action and report the result to `host`.
///
/// Single catch point: every error ends in exactly one `set_failed`, and no
/// outputs are set on that path.
pub async fn run<E, H, P, F>(inputs: &ActionInputs<E>, host: &mut H, connect: F) -> RunStatus
where
    E: Environment,
    H: ActionHost,
    P: CommentPublisher,
    F: FnOnce(&ApiKey) -> Result<P>,
{
    let result = match execute(inputs, host, connect).await {
        Ok(outputs) => report_outputs(host, &outputs),
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => RunStatus::Success,
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "run failed");
            host.set_failed(&err.to_string());
            RunStatus::Failure
        }
    }
}

fn report_outputs<H: ActionHost>(host: &mut H, outputs: &ActionOutputs) -> Result<()> {
    host.set_outputs(&outputs.pairs())
}
