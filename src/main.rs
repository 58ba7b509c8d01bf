mod branch;
mod commands;
mod error;
mod git;
mod github;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "backporter")]
#[command(about = "Backport GitHub pull requests to maintenance branches")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Backport a pull request to another branch
    Backport {
        /// GitHub PR URL (e.g., https://github.com/owner/repo/pull/123)
        url: String,

        /// Target branch: `master`, or a maintenance branch such as 7.x or 7.10
        branch: String,
    },

    /// Check authentication status
    Auth,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Backport { url, branch } => {
            commands::backport::run(&url, &branch).await?;
        }
        Commands::Auth => {
            commands::auth::run().await?;
        }
    }

    Ok(())
}
