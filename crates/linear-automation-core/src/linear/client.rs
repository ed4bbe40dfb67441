//! Linear GraphQL API client

use super::response::{CommentCreateRequest, CommentCreateResponse};
use crate::error::{Error, PublishFailure, Result};
use crate::inputs::Environment;
use crate::traits::CommentPublisher;
use crate::types::{ApiKey, IssueId, PostedComment};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use std::future::Future;
use std::pin::Pin;

/// Public Linear GraphQL endpoint
pub const DEFAULT_API_URL: &str = "https://api.linear.app/graphql";

/// Environment variable overriding [`DEFAULT_API_URL`]
pub const API_URL_VAR: &str = "LINEAR_API_URL";

/// Linear API client posting comments through `commentCreate`
pub struct LinearClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    authorization: HeaderValue,
}

impl std::fmt::Debug for LinearClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("authorization", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl LinearClient {
    /// Create a client for `endpoint` authenticating with `api_key`
    pub fn new(endpoint: &str, api_key: &ApiKey) -> Result<Self> {
        let endpoint = reqwest::Url::parse(endpoint)
            .map_err(|e| Error::Config(format!("invalid Linear API URL: {}", e)))?;

        // Personal API keys go in the header as-is, without a scheme
        let mut authorization = HeaderValue::from_str(api_key.expose())
            .map_err(|_| Error::Config("Linear API key contains invalid characters".to_string()))?;
        authorization.set_sensitive(true);

        let client = reqwest::Client::builder()
            .user_agent(concat!("linear-automation/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            authorization,
        })
    }

    /// Create from the environment, honoring `LINEAR_API_URL`
    pub fn from_env<E: Environment>(env: &E, api_key: &ApiKey) -> Result<Self> {
        let endpoint = env
            .var(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self::new(endpoint.trim(), api_key)
    }

    /// GraphQL endpoint in use
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Create a comment on `issue_id`
    ///
    /// No retries: any failure is final for this run.
    pub async fn create_comment(&self, issue_id: &IssueId, body: &str) -> Result<PostedComment> {
        tracing::debug!(issue = %issue_id, endpoint = %self.endpoint, "posting Linear comment");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, self.authorization.clone())
            .json(&CommentCreateRequest::new(issue_id, body))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, issue = %issue_id, "Linear API returned error status");
            return Err(PublishFailure::Rejected.into());
        }

        let bytes = response.bytes().await?;
        let parsed: CommentCreateResponse = serde_json::from_slice(&bytes)?;
        let posted = parsed.into_posted(issue_id)?;

        tracing::debug!(comment = %posted.comment_id, issue = %issue_id, "comment created");
        Ok(posted)
    }
}

impl CommentPublisher for LinearClient {
    type PostFuture<'a> = Pin<Box<dyn Future<Output = Result<PostedComment>> + Send + 'a>>;

    fn post<'a>(&'a self, issue_id: &'a IssueId, body: &'a str) -> Self::PostFuture<'a> {
        Box::pin(self.create_comment(issue_id, body))
    }
}
