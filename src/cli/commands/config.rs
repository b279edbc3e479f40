//! `stalebot config`: show what a run would use, without calling the API.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, Policy};
use crate::infrastructure::config::{ConfigLoader, ConfigOverrides};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path to a YAML config file (defaults to .github/stalebot.yaml)
    #[arg(short, long, env = "STALEBOT_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    /// Resolved configuration with the token redacted
    pub config: Config,
    pub policy: Policy,
}

impl CommandOutput for ConfigOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(self).unwrap_or_default()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: ConfigArgs, json_mode: bool) -> Result<()> {
    let config = ConfigLoader::load(args.config.as_deref(), &ConfigOverrides::default())?;
    let policy = ConfigLoader::build_policy(&config)?;

    output(
        &ConfigOutput {
            config: config.redacted(),
            policy,
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_output_never_shows_token() {
        let config = Config {
            repo_token: "ghp_secret".to_string(),
            repository: "octo/widgets".to_string(),
            ..Default::default()
        };
        let out = ConfigOutput {
            policy: ConfigLoader::build_policy(&config).unwrap(),
            config: config.redacted(),
        };
        assert!(!out.to_human().contains("ghp_secret"));
        assert!(!out.to_json().to_string().contains("ghp_secret"));
        assert_eq!(out.to_json()["policy"]["operations_per_run"], 100);
    }
}
