//! Core logic for zredactor
//!
//! This crate contains:
//! - Domain models (Comment, Attachment)
//! - The request context shared by every API call
//! - The Zendesk API seam and its HTTP implementation
//! - Snippet and attachment redaction flows

pub mod client;
pub mod comment;
pub mod context;
pub mod error;
pub mod redact;

pub use client::{ClientOptions, ZendeskApi, ZendeskClient};
pub use comment::{Attachment, Comment};
pub use context::{Credentials, RequestContext};
pub use error::{ApiError, RedactError, Result};
pub use redact::{RedactionSummary, redact_attachments, redact_snippets};
