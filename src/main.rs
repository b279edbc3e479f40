//! Stalebot CLI entry point.

use clap::Parser;

use stalebot::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => stalebot::cli::commands::run::execute(args, cli.json).await,
        Commands::Config(args) => stalebot::cli::commands::config::execute(args, cli.json),
    };

    if let Err(err) = result {
        stalebot::cli::handle_error(err, cli.json);
    }
}
