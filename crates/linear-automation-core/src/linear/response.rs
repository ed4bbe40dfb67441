//! `commentCreate` request and response shapes

use crate::error::{PublishFailure, Result};
use crate::types::{IssueId, PostedComment};
use serde::{Deserialize, Serialize};

/// GraphQL mutation creating a comment; the id is left to the server
pub const COMMENT_CREATE_MUTATION: &str = "mutation CommentCreate($input: CommentCreateInput!) { \
     commentCreate(input: $input) { success comment { id } } }";

/// Request body sent to the GraphQL endpoint
#[derive(Debug, Serialize)]
pub struct CommentCreateRequest<'a> {
    query: &'static str,
    variables: CommentCreateVariables<'a>,
}

#[derive(Debug, Serialize)]
struct CommentCreateVariables<'a> {
    input: CommentCreateInput<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentCreateInput<'a> {
    issue_id: String,
    body: &'a str,
}

impl<'a> CommentCreateRequest<'a> {
    /// Build the mutation for `issue_id` with a markdown `body`
    pub fn new(issue_id: &IssueId, body: &'a str) -> Self {
        Self {
            query: COMMENT_CREATE_MUTATION,
            variables: CommentCreateVariables {
                input: CommentCreateInput {
                    issue_id: issue_id.to_string(),
                    body,
                },
            },
        }
    }
}

/// GraphQL envelope
#[derive(Debug, Deserialize)]
pub struct CommentCreateResponse {
    data: Option<CommentCreateData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentCreateData {
    comment_create: Option<CommentPayload>,
}

#[derive(Debug, Deserialize)]
struct CommentPayload {
    #[serde(default)]
    success: bool,
    comment: Option<CommentNode>,
}

#[derive(Debug, Deserialize)]
struct CommentNode {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

impl CommentCreateResponse {
    /// Turn the response into the posted comment, or the reason there is none.
    ///
    /// The returned issue id is the requested one, not a server echo.
    pub fn into_posted(self, issue_id: &IssueId) -> Result<PostedComment> {
        for error in &self.errors {
            tracing::warn!(message = %error.message, "Linear API returned an error");
        }
        let api_errors = !self.errors.is_empty();

        let payload = self
            .data
            .and_then(|data| data.comment_create)
            .filter(|payload| payload.success && !api_errors)
            .ok_or(PublishFailure::Rejected)?;

        let comment = payload.comment.ok_or(PublishFailure::MissingComment)?;
        let comment_id = comment
            .id
            .filter(|id| !id.is_empty())
            .ok_or(PublishFailure::MissingCommentData)?;

        Ok(PostedComment {
            comment_id,
            issue_id: issue_id.clone(),
        })
    }
}
