//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use console::style;

/// Report a failed command and exit with status 1.
///
/// This is the single catch point for errors: everything below the CLI
/// propagates. Under GitHub Actions the message is also emitted as an
/// `::error::` workflow command so it shows up as an annotation.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true") {
        println!("::error::{}", workflow_escape(&format!("{err:#}")));
    }

    if json_mode {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        let payload = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "causes": chain,
        });
        eprintln!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    } else {
        eprintln!("{} {err:#}", style("Error:").red().bold());
    }

    std::process::exit(1);
}

/// Escape a message for use in a workflow command.
fn workflow_escape(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
