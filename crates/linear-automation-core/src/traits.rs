//! Seams to the outside world: the issue tracker and the CI host

use crate::error::Result;
use crate::types::{IssueId, PostedComment};
use std::future::Future;

/// Posts comments on issues in the tracker
///
/// GAT future type: static dispatch, implementors pick their own future.
pub trait CommentPublisher {
    /// GAT for the async post operation
    type PostFuture<'a>: Future<Output = Result<PostedComment>> + Send + 'a
    where
        Self: 'a;

    /// Post `body` as a new comment on `issue_id`
    fn post<'a>(&'a self, issue_id: &'a IssueId, body: &'a str) -> Self::PostFuture<'a>;
}

/// Reporting channel of the CI host running the action
pub trait ActionHost {
    /// Hide `secret` from every subsequent log line
    fn mask(&mut self, secret: &str) -> Result<()>;

    /// Set a named step output
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;

    /// Set several outputs at once.
    ///
    /// Hosts that can fail halfway override this so either every output is
    /// set or none is.
    fn set_outputs(&mut self, outputs: &[(&str, &str)]) -> Result<()> {
        for (name, value) in outputs {
            self.set_output(name, value)?;
        }
        Ok(())
    }

    /// Mark the run failed with `message`
    fn set_failed(&mut self, message: &str);
}
