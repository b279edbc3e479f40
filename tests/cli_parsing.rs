use std::path::PathBuf;

use clap::Parser;
use stalebot::cli::{Cli, Commands};

#[test]
fn test_parse_run_defaults() {
    let cli = Cli::try_parse_from(vec!["stalebot", "run"]).unwrap();

    assert!(!cli.json);
    match cli.command {
        Commands::Run(args) => {
            assert!(args.repository.is_none());
            assert!(args.operations_per_run.is_none());
            assert!(!args.debug_only);

            let overrides = args.overrides();
            assert!(overrides.repository.is_none());
            assert!(overrides.operations_per_run.is_none());
            assert!(overrides.debug_only.is_none());
        }
        Commands::Config(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_run_with_overrides() {
    let cli = Cli::try_parse_from(vec![
        "stalebot",
        "run",
        "--config",
        "ci/stale.yaml",
        "--repository",
        "octo/widgets",
        "--operations-per-run",
        "25",
        "--debug-only",
    ])
    .unwrap();

    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.config, Some(PathBuf::from("ci/stale.yaml")));
            let overrides = args.overrides();
            assert_eq!(overrides.repository.as_deref(), Some("octo/widgets"));
            assert_eq!(overrides.operations_per_run, Some(25));
            assert_eq!(overrides.debug_only, Some(true));
        }
        Commands::Config(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_run_short_flags() {
    let cli = Cli::try_parse_from(vec!["stalebot", "run", "-r", "octo/gadgets", "-c", "a.yaml"])
        .unwrap();

    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.repository.as_deref(), Some("octo/gadgets"));
            assert_eq!(args.config, Some(PathBuf::from("a.yaml")));
        }
        Commands::Config(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_config_with_global_json() {
    let cli = Cli::try_parse_from(vec!["stalebot", "config", "--json"]).unwrap();

    assert!(cli.json);
    assert!(matches!(cli.command, Commands::Config(_)));
}

#[test]
fn test_json_flag_before_subcommand() {
    let cli = Cli::try_parse_from(vec!["stalebot", "--json", "run", "--debug-only"]).unwrap();

    assert!(cli.json);
    match cli.command {
        Commands::Run(args) => assert!(args.debug_only),
        Commands::Config(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_invalid_operations_per_run_rejected() {
    let result = Cli::try_parse_from(vec!["stalebot", "run", "--operations-per-run", "lots"]);
    assert!(result.is_err());
}

#[test]
fn test_missing_subcommand_rejected() {
    assert!(Cli::try_parse_from(vec!["stalebot"]).is_err());
}

#[test]
fn test_unknown_subcommand_rejected() {
    assert!(Cli::try_parse_from(vec!["stalebot", "sweep"]).is_err());
}
