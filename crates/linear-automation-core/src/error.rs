//! Error types for linear-automation-core

use std::fmt;

/// Fixed tag prefixed to every error rendered for the CI host
pub const ERROR_TAG: &str = "linear-automation-actions error";

/// Result type alias for linear-automation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ways the Linear API can refuse to hand back a usable comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PublishFailure {
    /// The mutation reported `success: false` (or the API returned errors)
    #[error("failed to comment the automatically linked issue.")]
    Rejected,

    /// The mutation succeeded but the payload carries no comment object
    #[error(
        "initial request for posting the comment returns success but no way to access \
         the posted comment data, cannot provide outputs."
    )]
    MissingComment,

    /// A comment object is present but its data is empty
    #[error("request returns success but not comment data present, cannot provide outputs.")]
    MissingCommentData,
}

/// Main error type for linear-automation operations
#[derive(Debug)]
pub enum Error {
    /// A required action input is absent or blank
    MissingInput(String),

    /// Invalid configuration (endpoint URL, client construction, ...)
    Config(String),

    /// The pull-request branch name could not be determined
    BranchName,

    /// The branch name does not follow the Linear naming convention
    Extraction,

    /// The Linear API did not return a posted comment
    Publish(PublishFailure),

    /// Transport-level failure talking to the Linear API
    Http(String),

    /// Writing action outputs failed
    Output(String),

    /// I/O error
    Io(std::io::Error),

    /// Runtime error (Tokio, threading, etc.)
    Runtime(String),
}

impl PublishFailure {
    /// Static description, identical to the `Display` output
    pub const fn as_str(&self) -> &'static str {
        match self {
            PublishFailure::Rejected => "failed to comment the automatically linked issue.",
            PublishFailure::MissingComment => {
                "initial request for posting the comment returns success but no way to access \
                 the posted comment data, cannot provide outputs."
            }
            PublishFailure::MissingCommentData => {
                "request returns success but not comment data present, cannot provide outputs."
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingInput(name) => {
                write!(f, "{}: missing required input \"{}\"", ERROR_TAG, name)
            }
            Error::Config(msg) => write!(f, "{}: invalid configuration: {}", ERROR_TAG, msg),
            Error::BranchName => {
                write!(f, "{}: cannot get Pull Request branch name.", ERROR_TAG)
            }
            Error::Extraction => write!(
                f,
                "{}: could not extract Linear Issue ID from Pull Request branch name.",
                ERROR_TAG
            ),
            Error::Publish(failure) => write!(f, "{}: {}", ERROR_TAG, failure),
            Error::Http(msg) => write!(f, "{}: Linear API request failed: {}", ERROR_TAG, msg),
            Error::Output(msg) => write!(f, "{}: cannot set outputs: {}", ERROR_TAG, msg),
            Error::Io(err) => write!(f, "{}: I/O error: {}", ERROR_TAG, err),
            Error::Runtime(msg) => write!(f, "{}: runtime error: {}", ERROR_TAG, msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Publish(failure) => Some(failure),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Strip the URL so query strings never end up in the failure message
        Error::Http(err.without_url().to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Http(format!("malformed response body: {}", err))
    }
}

impl From<PublishFailure> for Error {
    fn from(failure: PublishFailure) -> Self {
        Error::Publish(failure)
    }
}

/// Fieldless error category for cheap pattern matching.
///
/// Single byte representation (`#[repr(u8)]`), `Copy`, no allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Required input missing
    MissingInput,
    /// Configuration error
    Config,
    /// Branch name resolution error
    BranchName,
    /// Issue identifier extraction error
    Extraction,
    /// Comment publication error
    Publish,
    /// HTTP transport error
    Http,
    /// Output writing error
    Output,
    /// I/O operation error
    Io,
    /// Runtime error
    Runtime,
}

impl Error {
    /// Get the error kind. Zero allocation, returns a Copy enum.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingInput(_) => ErrorKind::MissingInput,
            Error::Config(_) => ErrorKind::Config,
            Error::BranchName => ErrorKind::BranchName,
            Error::Extraction => ErrorKind::Extraction,
            Error::Publish(_) => ErrorKind::Publish,
            Error::Http(_) => ErrorKind::Http,
            Error::Output(_) => ErrorKind::Output,
            Error::Io(_) => ErrorKind::Io,
            Error::Runtime(_) => ErrorKind::Runtime,
        }
    }

    /// Borrow the untagged detail of the error.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Error::MissingInput(name) => name,
            Error::Config(msg)
            | Error::Http(msg)
            | Error::Output(msg)
            | Error::Runtime(msg) => msg,
            Error::BranchName => "cannot get Pull Request branch name.",
            Error::Extraction => "could not extract Linear Issue ID from Pull Request branch name.",
            Error::Publish(failure) => failure.as_str(),
            Error::Io(_) => "I/O error",
        }
    }

    /// Whether the failure happened while publishing the comment
    #[inline]
    pub const fn is_publication(&self) -> bool {
        matches!(self, Error::Publish(_) | Error::Http(_))
    }
}
