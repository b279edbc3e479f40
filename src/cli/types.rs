//! CLI type definitions
//!
//! This module contains the clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use super::commands::config::ConfigArgs;
use super::commands::run::RunArgs;

#[derive(Parser, Debug)]
#[command(name = "stalebot")]
#[command(about = "Stalebot - mark and close stale issues and pull requests", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply the staleness policy to every open issue and pull request
    Run(RunArgs),

    /// Validate and print the resolved configuration and policy
    Config(ConfigArgs),
}
