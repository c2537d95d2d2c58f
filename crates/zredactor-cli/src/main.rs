mod cli;
mod commands;
mod snippets;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use zredactor_config::Config;
use zredactor_core::{ClientOptions, Credentials, RequestContext, ZendeskClient};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the redaction report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: cli::Cli) -> Result<ExitCode> {
    let config = Config::load()?;

    // Resolve snippets before touching the network
    let snippets = match cli.command {
        cli::Commands::Snippets {
            snippets: positional,
            file,
        } => Some(snippets::load_snippets(positional, file.as_deref())?),
        cli::Commands::Attachments => None,
    };

    let ctx = RequestContext::new(
        &config.domain,
        &cli.organization,
        cli.ticket_id,
        Credentials::new(cli.email, cli.token),
        cli.dry_run,
    );
    tracing::debug!(
        base_url = %ctx.base_url,
        dry_run = ctx.dry_run,
        "Request context ready"
    );

    let client = ZendeskClient::new(ClientOptions {
        user_agent: config.user_agent.clone(),
        timeout: config.timeout(),
    })?;

    match snippets {
        Some(snippets) => commands::snippets::handle(&client, &ctx, &snippets).await,
        None => commands::attachments::handle(&client, &ctx).await,
    }
}
