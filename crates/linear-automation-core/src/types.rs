//! Core type definitions

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Linear issue identifier, e.g. `ENG-1038`
///
/// The team prefix is always stored upper-cased and the number carries no
/// leading zeros, so `Display` yields the canonical `PREFIX-NUMBER` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueId {
    prefix: String,
    number: u64,
}

impl IssueId {
    /// Build an identifier, upper-casing the team prefix.
    ///
    /// Returns `None` for an empty prefix.
    pub fn new(prefix: &str, number: u64) -> Option<Self> {
        if prefix.is_empty() {
            return None;
        }
        Some(Self {
            prefix: prefix.to_uppercase(),
            number,
        })
    }

    /// Upper-cased team prefix
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Issue sequence number within the team
    #[inline]
    pub const fn number(&self) -> u64 {
        self.number
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.number)
    }
}

impl FromStr for IssueId {
    type Err = Error;

    /// Parse the canonical `PREFIX-NUMBER` form (prefix case is normalized).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, number) = s.split_once('-').ok_or(Error::Extraction)?;
        let number = parse_issue_number(number).ok_or(Error::Extraction)?;
        IssueId::new(prefix, number).ok_or(Error::Extraction)
    }
}

/// Strict base-10 parse: ASCII digits only, no sign, no whitespace.
pub(crate) fn parse_issue_number(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Comment created on a Linear issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedComment {
    /// Identifier Linear assigned to the new comment
    pub comment_id: String,
    /// Issue the comment was posted on; always the requested identifier
    pub issue_id: IssueId,
}

/// Output names declared in `action.yml`
pub mod output_names {
    /// Identifier of the created comment
    pub const COMMENT_ID: &str = "postedLinearCommentId";
    /// Canonical identifier of the commented issue
    pub const ISSUE_ID: &str = "postedOnLinearIssueId";
}

/// Values reported back to the workflow on success
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionOutputs {
    /// `postedLinearCommentId`, empty on a test run
    pub comment_id: String,
    /// `postedOnLinearIssueId`, empty on a test run
    pub issue_id: String,
}

impl ActionOutputs {
    /// Outputs of a self-test run: both values empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// `(name, value)` pairs in declaration order
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [
            (output_names::COMMENT_ID, self.comment_id.as_str()),
            (output_names::ISSUE_ID, self.issue_id.as_str()),
        ]
    }
}

impl From<PostedComment> for ActionOutputs {
    fn from(posted: PostedComment) -> Self {
        Self {
            comment_id: posted.comment_id,
            issue_id: posted.issue_id.to_string(),
        }
    }
}

/// Linear API key
///
/// `Debug` is redacted; the raw value is only reachable through
/// [`ApiKey::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the raw key, for the `Authorization` header only
    #[inline]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_id_display_is_canonical() {
        let id = IssueId::new("teamA", 1038).unwrap();
        assert_eq!(id.to_string(), "TEAMA-1038");
        assert_eq!(id.prefix(), "TEAMA");
        assert_eq!(id.number(), 1038);
    }

    #[test]
    fn test_issue_id_rejects_empty_prefix() {
        assert!(IssueId::new("", 12).is_none());
    }

    #[test]
    fn test_issue_id_from_str() {
        let id: IssueId = "eng-0042".parse().unwrap();
        assert_eq!(id.to_string(), "ENG-42");

        assert!("ENG".parse::<IssueId>().is_err());
        assert!("ENG-".parse::<IssueId>().is_err());
        assert!("-12".parse::<IssueId>().is_err());
        assert!("ENG-12x".parse::<IssueId>().is_err());
        assert!("ENG-+12".parse::<IssueId>().is_err());
    }

    #[test]
    fn test_parse_issue_number_is_strict() {
        assert_eq!(parse_issue_number("1234"), Some(1234));
        assert_eq!(parse_issue_number("007"), Some(7));
        assert_eq!(parse_issue_number("0"), Some(0));
        assert_eq!(parse_issue_number(""), None);
        assert_eq!(parse_issue_number(" "), None);
        assert_eq!(parse_issue_number(" 12"), None);
        assert_eq!(parse_issue_number("1234x"), None);
        assert_eq!(parse_issue_number("12.5"), None);
        assert_eq!(parse_issue_number("+1"), None);
        assert_eq!(parse_issue_number("-1"), None);
        assert_eq!(parse_issue_number("0x10"), None);
        // overflow
        assert_eq!(parse_issue_number("99999999999999999999999"), None);
    }

    #[test]
    fn test_outputs_from_posted_comment() {
        let posted = PostedComment {
            comment_id: "c0ffee".to_string(),
            issue_id: IssueId::new("eng", 7).unwrap(),
        };
        let outputs = ActionOutputs::from(posted);
        assert_eq!(
            outputs.pairs(),
            [("postedLinearCommentId", "c0ffee"), ("postedOnLinearIssueId", "ENG-7")]
        );
    }

    #[test]
    fn test_empty_outputs() {
        let outputs = ActionOutputs::empty();
        assert_eq!(
            outputs.pairs(),
            [("postedLinearCommentId", ""), ("postedOnLinearIssueId", "")]
        );
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("lin_api_supersecret");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("supersecret"));
        assert_eq!(key.expose(), "lin_api_supersecret");
    }
}
