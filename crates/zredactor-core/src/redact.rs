//! Snippet and attachment redaction flows
//!
//! Both flows fetch the ticket's comments once, walk them in API order and
//! write human-readable progress to `out`. A failed comment fetch aborts the
//! flow; a failed redaction is reported and the flow moves on.

use std::io::Write;

use tracing::{debug, info};

use crate::client::ZendeskApi;
use crate::comment::Comment;
use crate::context::RequestContext;
use crate::error::{RedactError, Result};

const NO_SNIPPETS_FOUND: &str = "None of the provided text snippets were found in the ticket";

/// Counts for one flow run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedactionSummary {
    /// Matches found (snippet/comment pairs or attachments)
    pub found: usize,
    /// Redaction calls that succeeded
    pub redacted: usize,
    /// Redaction calls that failed
    pub failed: usize,
}

async fn fetch_comments(api: &dyn ZendeskApi, ctx: &RequestContext) -> Result<Vec<Comment>> {
    api.list_comments(ctx)
        .await
        .map_err(RedactError::FetchComments)
}

/// Redact each snippet from every comment whose body contains it
pub async fn redact_snippets<W: Write>(
    api: &dyn ZendeskApi,
    ctx: &RequestContext,
    snippets: &[String],
    out: &mut W,
) -> Result<RedactionSummary> {
    let mut summary = RedactionSummary::default();

    // An empty snippet file has nothing to match; skip the fetch
    if snippets.is_empty() {
        writeln!(out, "{}", NO_SNIPPETS_FOUND)?;
        return Ok(summary);
    }

    let comments = fetch_comments(api, ctx).await?;
    info!(
        "Searching {} comments for {} snippets",
        comments.len(),
        snippets.len()
    );

    for snippet in snippets {
        let mut snippet_found = false;

        for comment in comments.iter().filter(|c| c.contains(snippet)) {
            snippet_found = true;
            summary.found += 1;
            writeln!(out, "Found snippet '{}' in comment {}", snippet, comment.id)?;

            if ctx.dry_run {
                writeln!(out, "Running dry, skipping")?;
                continue;
            }

            writeln!(out, "Redacting snippet")?;
            match api.redact_text(ctx, comment.id, snippet).await {
                Ok(()) => summary.redacted += 1,
                Err(err) => {
                    summary.failed += 1;
                    writeln!(out, "Redaction failed: {}", err)?;
                }
            }
        }

        if !snippet_found {
            writeln!(out, "Snippet '{}' not found in ticket", snippet)?;
        }
    }

    if summary.found == 0 {
        writeln!(out, "{}", NO_SNIPPETS_FOUND)?;
    }

    debug!(?summary, "Snippet redaction finished");
    Ok(summary)
}

/// Redact every attachment on every comment of the ticket
pub async fn redact_attachments<W: Write>(
    api: &dyn ZendeskApi,
    ctx: &RequestContext,
    out: &mut W,
) -> Result<RedactionSummary> {
    let comments = fetch_comments(api, ctx).await?;
    let mut summary = RedactionSummary::default();

    for comment in &comments {
        for attachment in &comment.attachments {
            summary.found += 1;
            writeln!(
                out,
                "Found attachment {} in comment {}",
                attachment.id, comment.id
            )?;

            if ctx.dry_run {
                writeln!(out, "Running dry, skipping")?;
                continue;
            }

            writeln!(out, "Redacting attachment")?;
            match api.redact_attachment(ctx, comment.id, attachment.id).await {
                Ok(()) => summary.redacted += 1,
                Err(err) => {
                    summary.failed += 1;
                    writeln!(out, "Redaction failed: {}", err)?;
                }
            }
        }
    }

    if summary.found == 0 {
        writeln!(out, "Ticket contains not attachments")?;
    }

    debug!(?summary, "Attachment redaction finished");
    Ok(summary)
}
