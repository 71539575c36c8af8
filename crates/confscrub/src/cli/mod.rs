//! Command-line interface for confscrub.
//!
//! This module provides the CLI structure for the `confscrub` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, ListCommand, RunCommand, SelectionArgs};

/// confscrub - Redact secrets from built configuration files
///
/// Replaces the values at configured dotted key paths in .properties, YAML,
/// JSON and XML files under a build output directory with a fixed placeholder.
#[derive(Debug, Parser)]
#[command(name = "confscrub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the project configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Redact configured keys in selected files
    Run(RunCommand),

    /// List the files that would be considered
    List(ListCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::List(ListCommand::default()),
        }
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "confscrub");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity() {
        use crate::logging::Verbosity;

        assert_eq!(cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_run() {
        let args = vec![
            "confscrub",
            "run",
            "--root",
            "target/classes",
            "-k",
            "database.password",
            "--key",
            "api.token",
            "-i",
            "**/*.yml",
            "-e",
            "**/test/**",
            "--prefix",
            "ENC(",
            "--suffix",
            ")",
            "--dry-run",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Run(run) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(run.selection.root, Some(PathBuf::from("target/classes")));
        assert_eq!(run.keys, vec!["database.password", "api.token"]);
        assert_eq!(run.selection.includes, vec!["**/*.yml"]);
        assert_eq!(run.selection.excludes, vec!["**/test/**"]);
        assert_eq!(run.prefix.as_deref(), Some("ENC("));
        assert_eq!(run.suffix.as_deref(), Some(")"));
        assert!(run.dry_run);
        assert!(!run.json);
    }

    #[test]
    fn test_parse_hyphen_prefix() {
        let cli = Cli::try_parse_from(["confscrub", "run", "--prefix", "-", "--suffix", "-"]).unwrap();
        let Command::Run(run) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(run.prefix.as_deref(), Some("-"));
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["confscrub", "list", "-r", "dist"]).unwrap();
        assert!(matches!(cli.command, Command::List(_)));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["confscrub", "config", "validate", "-f", "x.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["confscrub", "-c", "custom.toml", "-vv", "list"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.verbose, 2);
    }
}
