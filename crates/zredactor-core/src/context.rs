//! Request context shared by every call against one ticket

use secrecy::{ExposeSecret, SecretString};

/// Agent email plus API token
///
/// Zendesk's API token auth uses `{email}/token` as the Basic Auth username
/// and the token itself as the password.
#[derive(Debug)]
pub struct Credentials {
    email: String,
    token: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: SecretString::from(token.into()),
        }
    }

    pub fn username(&self) -> String {
        format!("{}/token", self.email)
    }

    /// Username and password for HTTP Basic Auth
    pub fn basic_auth(&self) -> (String, &str) {
        (self.username(), self.token.expose_secret())
    }
}

/// Immutable per-invocation context
#[derive(Debug)]
pub struct RequestContext {
    pub base_url: String,
    pub credentials: Credentials,
    pub dry_run: bool,
}

impl RequestContext {
    pub fn new(
        domain: &str,
        organization: &str,
        ticket_id: u64,
        credentials: Credentials,
        dry_run: bool,
    ) -> Self {
        Self {
            base_url: format!(
                "https://{}.{}/api/v2/tickets/{}/comments",
                organization, domain, ticket_id
            ),
            credentials,
            dry_run,
        }
    }

    pub fn comment_redact_url(&self, comment_id: u64) -> String {
        format!("{}/{}/redact.json", self.base_url, comment_id)
    }

    pub fn attachment_redact_url(&self, comment_id: u64, attachment_id: u64) -> String {
        format!(
            "{}/{}/attachments/{}/redact.json",
            self.base_url, comment_id, attachment_id
        )
    }
}
