//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::Config;

/// Arguments that pick which files are considered.
///
/// A list given on the command line replaces the configured one.
#[derive(Debug, Default, Args)]
pub struct SelectionArgs {
    /// Directory to scan (defaults to the configured root)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Glob pattern of files to include (repeatable)
    #[arg(short, long = "include", value_name = "GLOB")]
    pub includes: Vec<String>,

    /// Glob pattern of files to exclude (repeatable)
    #[arg(short, long = "exclude", value_name = "GLOB")]
    pub excludes: Vec<String>,
}

impl SelectionArgs {
    /// Apply these arguments on top of a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(root) = &self.root {
            config.root.clone_from(root);
        }
        if !self.includes.is_empty() {
            config.includes.clone_from(&self.includes);
        }
        if !self.excludes.is_empty() {
            config.excludes.clone_from(&self.excludes);
        }
    }
}

/// Run command arguments.
#[derive(Debug, Default, Args)]
pub struct RunCommand {
    /// File selection
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Dotted key path to redact (repeatable)
    #[arg(short, long = "key", value_name = "KEY")]
    pub keys: Vec<String>,

    /// Text written before the placeholder marker
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Text written after the placeholder marker
    #[arg(long, allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Report what would be redacted without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output the run summary as JSON
    #[arg(short, long)]
    pub json: bool,
}

impl RunCommand {
    /// Apply these arguments on top of a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        self.selection.apply(config);
        if !self.keys.is_empty() {
            config.keys.clone_from(&self.keys);
        }
        if let Some(prefix) = &self.prefix {
            config.prefix.clone_from(prefix);
        }
        if let Some(suffix) = &self.suffix {
            config.suffix.clone_from(suffix);
        }
    }
}

/// List command arguments.
#[derive(Debug, Default, Args)]
pub struct ListCommand {
    /// File selection
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file paths
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_args_override() {
        let mut config = Config {
            includes: vec!["**/*.yml".to_string()],
            excludes: vec!["a/**".to_string()],
            ..Config::default()
        };
        let args = SelectionArgs {
            root: Some(PathBuf::from("dist")),
            includes: Vec::new(),
            excludes: vec!["b/**".to_string()],
        };

        args.apply(&mut config);

        assert_eq!(config.root, PathBuf::from("dist"));
        assert_eq!(config.includes, vec!["**/*.yml"]);
        assert_eq!(config.excludes, vec!["b/**"]);
    }

    #[test]
    fn test_run_command_override() {
        let mut config = Config {
            keys: vec!["old".to_string()],
            ..Config::default()
        };
        let cmd = RunCommand {
            keys: vec!["db.password".to_string()],
            prefix: Some("ENC(".to_string()),
            suffix: Some(")".to_string()),
            ..RunCommand::default()
        };

        cmd.apply(&mut config);

        assert_eq!(config.keys, vec!["db.password"]);
        assert_eq!(config.placeholder().text(), "ENC(OBFUSCATED)");
    }

    #[test]
    fn test_run_command_empty_keeps_config() {
        let mut config = Config {
            keys: vec!["kept".to_string()],
            ..Config::default()
        };
        let before = config.clone();

        RunCommand::default().apply(&mut config);

        assert_eq!(config, before);
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
