use clap::Parser;
use nodus_prompt_sync::cli::{self, Cli, Command};
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Command::Sync) {
        Command::Sync => cli::sync::run().await,
        Command::Publish => cli::publish::run().await,
        Command::Verify => cli::verify::run().await,
    };

    if let Err(error) = result {
        error!("Prompt sync failed: {:#}", error);
        std::process::exit(1);
    }
}
