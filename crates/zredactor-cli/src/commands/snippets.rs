use std::process::ExitCode;

use anyhow::Result;
use zredactor_core::{RequestContext, ZendeskApi, redact_snippets};

pub async fn handle(
    api: &dyn ZendeskApi,
    ctx: &RequestContext,
    snippets: &[String],
) -> Result<ExitCode> {
    let mut out = std::io::stdout().lock();
    super::finish(redact_snippets(api, ctx, snippets, &mut out).await)
}
