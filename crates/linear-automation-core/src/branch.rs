//! Pull-request branch name resolution

use crate::error::Result;
use crate::inputs::{names, ActionInputs, Environment};

/// Variable the runner fills with the source branch of the triggering PR
pub const HEAD_REF_VAR: &str = "GITHUB_HEAD_REF";

/// Where the branch name comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchSource {
    /// `GITHUB_HEAD_REF`, only trustworthy inside this action's own workflows
    HeadRef,
    /// The required `githubPullRequestBranchName` input
    Input,
}

impl BranchSource {
    /// Source used for a given run mode
    #[inline]
    pub const fn for_mode(self_test: bool) -> Self {
        if self_test {
            BranchSource::HeadRef
        } else {
            BranchSource::Input
        }
    }

    /// Resolve the branch name.
    ///
    /// `Ok(None)` means the head ref is unset or empty; a missing input is an
    /// error from the input resolver.
    pub fn resolve<E: Environment>(self, inputs: &ActionInputs<E>) -> Result<Option<String>> {
        match self {
            BranchSource::HeadRef => Ok(inputs
                .env()
                .var(HEAD_REF_VAR)
                .filter(|branch| !branch.is_empty())),
            BranchSource::Input => inputs
                .required(names::PULL_REQUEST_BRANCH_NAME)
                .map(Some),
        }
    }
}
