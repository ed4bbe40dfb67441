//! Action input resolution
//!
//! GitHub exposes every `with:` input of a step as an `INPUT_<NAME>`
//! environment variable. Values are trimmed and blank values count as absent.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Input names declared in `action.yml`
pub mod names {
    /// `"true"` switches to the self-test run
    pub const PERFORM_TEST_RUN: &str = "performTestRun";
    /// Linear API key
    pub const LINEAR_API_KEY: &str = "linearApiKey";
    /// Markdown body of the comment
    pub const LINEAR_COMMENT_TEXT: &str = "linearCommentText";
    /// Source branch of the pull request
    pub const PULL_REQUEST_BRANCH_NAME: &str = "githubPullRequestBranchName";
}

/// Read-only view of process environment variables
pub trait Environment {
    /// Look up a variable; `None` when unset or not valid UTF-8
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Environment variable carrying the input `name`
///
/// Spaces become underscores and the name is upper-cased, matching the runner.
pub fn input_env_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Resolves named action inputs from an [`Environment`]
///
/// Never logs the values it returns: inputs carry secrets.
#[derive(Debug, Clone, Copy)]
pub struct ActionInputs<E> {
    env: E,
}

impl<E: Environment> ActionInputs<E> {
    /// Wrap an environment
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Borrow the underlying environment
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Trimmed value of an optional input; blank counts as absent
    pub fn optional(&self, name: &str) -> Option<String> {
        let value = self.env.var(&input_env_key(name))?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Trimmed value of a required input
    ///
    /// # Errors
    ///
    /// [`Error::MissingInput`] when the input is absent or blank.
    pub fn required(&self, name: &str) -> Result<String> {
        self.optional(name)
            .ok_or_else(|| Error::MissingInput(name.to_string()))
    }

    /// Boolean-as-string input: `true` only for the exact string `"true"`
    pub fn flag(&self, name: &str) -> bool {
        self.optional(name).as_deref() == Some("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_input_env_key() {
        assert_eq!(input_env_key("linearApiKey"), "INPUT_LINEARAPIKEY");
        assert_eq!(input_env_key("my input"), "INPUT_MY_INPUT");
    }

    #[test]
    fn test_required_present_is_trimmed() {
        let inputs = ActionInputs::new(env(&[("INPUT_LINEARCOMMENTTEXT", "  hello\n")]));
        assert_eq!(inputs.required(names::LINEAR_COMMENT_TEXT).unwrap(), "hello");
    }

    #[test]
    fn test_required_missing() {
        let inputs = ActionInputs::new(env(&[]));
        assert_matches!(
            inputs.required(names::LINEAR_API_KEY),
            Err(Error::MissingInput(name)) if name == "linearApiKey"
        );
    }

    #[test]
    fn test_required_blank_is_missing() {
        let inputs = ActionInputs::new(env(&[("INPUT_LINEARAPIKEY", "   ")]));
        assert_matches!(
            inputs.required(names::LINEAR_API_KEY),
            Err(Error::MissingInput(_))
        );
    }

    #[test]
    fn test_optional_blank_is_none() {
        let inputs = ActionInputs::new(env(&[("INPUT_PERFORMTESTRUN", "")]));
        assert_eq!(inputs.optional(names::PERFORM_TEST_RUN), None);
        assert_eq!(inputs.optional("neverDeclared"), None);
    }

    #[test]
    fn test_flag_requires_exact_true() {
        for (raw, expected) in [
            ("true", true),
            (" true ", true),
            ("True", false),
            ("TRUE", false),
            ("1", false),
            ("yes", false),
            ("false", false),
        ] {
            let inputs = ActionInputs::new(env(&[("INPUT_PERFORMTESTRUN", raw)]));
            assert_eq!(inputs.flag(names::PERFORM_TEST_RUN), expected, "raw={raw:?}");
        }

        let inputs = ActionInputs::new(env(&[]));
        assert!(!inputs.flag(names::PERFORM_TEST_RUN));
    }

    #[test]
    fn test_missing_input_error_does_not_echo_other_values() {
        let inputs = ActionInputs::new(env(&[("INPUT_LINEARAPIKEY", "lin_api_secret")]));
        let err = inputs.required(names::LINEAR_COMMENT_TEXT).unwrap_err();
        assert!(!err.to_string().contains("lin_api_secret"));
    }
}
