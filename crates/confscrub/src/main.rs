//! `confscrub` - CLI for redacting built configuration files
//!
//! This binary loads the layered configuration, applies command-line
//! overrides and runs redaction over the configured build output directory.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use confscrub::cli::{Cli, Command, ConfigCommand, ListCommand, RunCommand};
use confscrub::{init_logging, Config, FileFormat, RunSummary, Runner};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    match cli.command {
        Command::Run(run_cmd) => handle_run(extract_config(cli.config.as_deref())?, &run_cmd),
        Command::List(list_cmd) => handle_list(extract_config(cli.config.as_deref())?, &list_cmd),
        Command::Config(config_cmd) => handle_config(cli.config.as_deref(), config_cmd),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load_from(path.map(Path::to_path_buf)).context("failed to load configuration")
}

/// Merge the configuration sources; validation waits until the flags are applied.
fn extract_config(path: Option<&Path>) -> Result<Config> {
    Config::extract_from(path.map(Path::to_path_buf)).context("failed to load configuration")
}

fn handle_run(mut config: Config, cmd: &RunCommand) -> Result<()> {
    cmd.apply(&mut config);
    config.validate()?;

    let runner = Runner::new(&config)?.dry_run(cmd.dry_run);
    let summary = runner
        .run()
        .with_context(|| format!("redaction of {} failed", runner.root().display()))?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    for redaction in &summary.redactions {
        println!("{} ({})", redaction.file, redaction.format);
        for key in &redaction.keys {
            println!("  {key}");
        }
    }
    let verb = if summary.dry_run {
        "would redact"
    } else {
        "redacted"
    };
    println!(
        "{} files scanned, {verb} {} keys in {} files",
        summary.files_scanned, summary.keys_redacted, summary.files_redacted
    );
}

fn handle_list(mut config: Config, cmd: &ListCommand) -> Result<()> {
    cmd.selection.apply(&mut config);
    config.validate()?;
    let selector = config.selector()?;

    if !config.root.exists() {
        info!(root = %config.root.display(), "root directory does not exist");
        return Ok(());
    }

    for candidate in selector.select(&config.root) {
        let candidate = candidate?;
        match FileFormat::from_path(&candidate.path) {
            Some(format) => println!("{}\t{format}", candidate.relative),
            None => println!("{}\t-", candidate.relative),
        }
    }
    Ok(())
}

fn handle_config(config_path: Option<&Path>, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("  Root:         {}", config.root.display());
                println!("  Keys:         {}", config.keys.join(", "));
                println!("  Includes:     {}", config.effective_includes().join(", "));
                println!("  Excludes:     {}", config.excludes.join(", "));
                println!("  Placeholder:  {}", config.placeholder().text());
            }
        }
        ConfigCommand::Path => {
            let project = config_path.map_or_else(Config::default_config_path, Path::to_path_buf);
            println!("project: {}", project.display());
            println!("user:    {}", Config::user_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or_else(|| config_path.map(Path::to_path_buf))
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path)).context("configuration is invalid")?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
