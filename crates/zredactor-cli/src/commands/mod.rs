pub mod attachments;
pub mod snippets;

use std::process::ExitCode;

use anyhow::Result;
use tracing::warn;
use zredactor_core::{RedactError, RedactionSummary};

/// Map a flow result to the process exit status
///
/// A failed comment fetch is reported on stdout and exits 1. Individual
/// redaction failures were already reported by the flow and do not change the
/// exit status.
pub fn finish(result: zredactor_core::Result<RedactionSummary>) -> Result<ExitCode> {
    match result {
        Ok(summary) => {
            if summary.failed > 0 {
                warn!(
                    failed = summary.failed,
                    redacted = summary.redacted,
                    "Some redactions failed"
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ RedactError::FetchComments(_)) => {
            println!("{}", err);
            Ok(ExitCode::from(1))
        }
        Err(err) => Err(err.into()),
    }
}
