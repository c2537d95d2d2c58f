use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "zredactor")]
#[command(about = "Redact text snippets and attachments from Zendesk ticket comments", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Zendesk organization name. Usually the zendesk.com subdomain (obscura in obscura.zendesk.com)
    #[arg(short, long, env = "ZREDACTOR_ORGANIZATION")]
    pub organization: String,

    /// A Zendesk agent email address. Usually the email you use to login to Zendesk as an agent
    #[arg(short, long, env = "ZREDACTOR_EMAIL")]
    pub email: String,

    /// Zendesk API token
    #[arg(short, long, env = "ZREDACTOR_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Zendesk ticket ID
    #[arg(short = 'i', long)]
    pub ticket_id: u64,

    /// Only show what would be done, but do not actually do anything
    #[arg(short = 'r', long)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Redact text snippets from ticket comments
    #[command(group(
        ArgGroup::new("source")
            .required(true)
            .args(["snippets", "file"])
    ))]
    Snippets {
        /// Text snippets to redact
        snippets: Vec<String>,

        /// File with one snippet per line ("-" reads stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Redact every attachment on the ticket
    Attachments,
}
