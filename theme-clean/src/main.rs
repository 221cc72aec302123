// theme-clean/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing::Level;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `live-files` output stays pipeable.
    // -v for the details of every deletion.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .without_time()
        .init();

    match cli.command {
        // --- USE CASE: CLEAN PREVIOUS BUILD ---
        Commands::Clean { options } => commands::clean::execute(options).await,

        // --- USE CASE: RECONCILE AGAINST A NEW MANIFEST ---
        Commands::Reconcile { current, options } => {
            commands::reconcile::execute(current, options).await
        }

        // --- USE CASE: INSPECT A MANIFEST ---
        Commands::LiveFiles { manifest, json } => commands::live_files::execute(manifest, json),
    }
}
