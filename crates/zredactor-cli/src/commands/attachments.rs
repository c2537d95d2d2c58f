use std::process::ExitCode;

use anyhow::Result;
use zredactor_core::{RequestContext, ZendeskApi, redact_attachments};

pub async fn handle(api: &dyn ZendeskApi, ctx: &RequestContext) -> Result<ExitCode> {
    let mut out = std::io::stdout().lock();
    super::finish(redact_attachments(api, ctx, &mut out).await)
}
