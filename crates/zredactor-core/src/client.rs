//! Zendesk REST API v2 client

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::comment::{Comment, CommentsPage};
use crate::context::RequestContext;
use crate::error::ApiError;

/// Operations the redaction flows need from Zendesk
#[async_trait]
pub trait ZendeskApi: Send + Sync {
    /// Fetch the first page of comments on the context's ticket
    async fn list_comments(&self, ctx: &RequestContext) -> Result<Vec<Comment>, ApiError>;

    /// Redact every occurrence of `text` from a comment
    async fn redact_text(
        &self,
        ctx: &RequestContext,
        comment_id: u64,
        text: &str,
    ) -> Result<(), ApiError>;

    /// Redact an attachment from a comment
    async fn redact_attachment(
        &self,
        ctx: &RequestContext,
        comment_id: u64,
        attachment_id: u64,
    ) -> Result<(), ApiError>;
}

/// HTTP client settings
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub user_agent: String,
    /// `None` keeps reqwest's default of no timeout
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            user_agent: format!("zredactor/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

#[derive(Serialize)]
struct RedactText<'a> {
    text: &'a str,
}

/// reqwest-backed implementation of [`ZendeskApi`]
pub struct ZendeskClient {
    http: reqwest::Client,
}

impl ZendeskClient {
    pub fn new(options: ClientOptions) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(options.user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
        })
    }

    fn authed(
        &self,
        ctx: &RequestContext,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        let (username, password) = ctx.credentials.basic_auth();
        request.basic_auth(username, Some(password))
    }
}

#[async_trait]
impl ZendeskApi for ZendeskClient {
    async fn list_comments(&self, ctx: &RequestContext) -> Result<Vec<Comment>, ApiError> {
        debug!("GET {}", ctx.base_url);

        let response = self
            .authed(ctx, self.http.get(&ctx.base_url))
            .send()
            .await?;
        let response = check_status(response).await?;

        let body = response.text().await?;
        let page: CommentsPage = serde_json::from_str(&body)?;

        debug!("Fetched {} comments", page.comments.len());
        Ok(page.comments)
    }

    async fn redact_text(
        &self,
        ctx: &RequestContext,
        comment_id: u64,
        text: &str,
    ) -> Result<(), ApiError> {
        let url = ctx.comment_redact_url(comment_id);
        debug!("PUT {}", url);

        let response = self
            .authed(ctx, self.http.put(&url))
            .json(&RedactText { text })
            .send()
            .await?;
        check_status(response).await?;

        Ok(())
    }

    async fn redact_attachment(
        &self,
        ctx: &RequestContext,
        comment_id: u64,
        attachment_id: u64,
    ) -> Result<(), ApiError> {
        let url = ctx.attachment_redact_url(comment_id, attachment_id);
        debug!("PUT {}", url);

        let response = self.authed(ctx, self.http.put(&url)).send().await?;
        check_status(response).await?;

        Ok(())
    }
}

/// Turn a non-2xx response into [`ApiError::Status`], keeping the body for diagnostics
pub async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), %url, %body, "Zendesk request failed");

    Err(ApiError::Status {
        code: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        url,
        body,
    })
}
