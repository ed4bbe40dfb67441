//! # Linear Automation Core
//!
//! Links a pull request to its Linear issue from CI and comments on it.
//!
//! The issue is found through the branch name Linear generates for it
//! (`feature/<team>-<number>-<title>`). Everything else is plumbing around
//! the GitHub Actions runner:
//! - **Inputs** come from `INPUT_*` variables ([`inputs`])
//! - **Comments** go through the Linear GraphQL API ([`linear`])
//! - **Outputs and failures** are reported with workflow commands ([`output`])
//!
//! ## Example
//!
//! ```no_run
//! use linear_automation_core::inputs::{ActionInputs, ProcessEnv};
//! use linear_automation_core::linear::LinearClient;
//! use linear_automation_core::output::GithubActionsHost;
//!
//! # async fn example() {
//! let inputs = ActionInputs::new(ProcessEnv);
//! let mut host = GithubActionsHost::from_env(&ProcessEnv);
//!
//! let status = linear_automation_core::run(&inputs, &mut host, |key| {
//!     LinearClient::from_env(&ProcessEnv, key)
//! })
//! .await;
//! println!("success: {}", status.is_success());
//! # }
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod action;
pub mod branch;
pub mod error;
pub mod extract;
pub mod inputs;
pub mod linear;
pub mod output;
pub mod traits;
pub mod types;

pub use action::{execute, run, RunStatus};
pub use error::{Error, ErrorKind, PublishFailure, Result};
pub use extract::{extract_issue_id, BRANCH_PREFIX};
pub use traits::{ActionHost, CommentPublisher};
pub use types::{ActionOutputs, ApiKey, IssueId, PostedComment};

/// Synchronous variant of [`run`] against the real process environment.
///
/// Builds a current-thread Tokio runtime, posts through [`linear::LinearClient`]
/// and reports to stdout / `$GITHUB_OUTPUT`.
pub fn run_from_env() -> Result<RunStatus> {
    let env = inputs::ProcessEnv;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Runtime(e.to_string()))?;

    let inputs = inputs::ActionInputs::new(env);
    let mut host = output::GithubActionsHost::from_env(&env);

    Ok(runtime.block_on(run(&inputs, &mut host, |key| {
        linear::LinearClient::from_env(&env, key)
    })))
}

