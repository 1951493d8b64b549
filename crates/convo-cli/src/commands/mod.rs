//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod convert;
pub mod demo;
pub mod show;

use anyhow::Context;
use clap::{Parser, Subcommand};
use convo_core::config::Config;
use std::path::Path;

/// convo - hierarchical discussion comment store
#[derive(Debug, Parser)]
#[command(name = "convo")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the sample-tree walkthrough
    Demo(demo::DemoArgs),

    /// Render a comment forest from an exchange file
    Show(show::ShowArgs),

    /// Convert a forest between the two exchange formats
    Convert(convert::ConvertArgs),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(cli.config.as_deref())?;

    // Dispatch to command handler
    match cli.command {
        Commands::Demo(args) => demo::execute(args, &config),
        Commands::Show(args) => show::execute(args),
        Commands::Convert(args) => convert::execute(args),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => directories::ProjectDirs::from("", "", "convo")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .filter(|p| p.exists()),
    };

    match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_config_when_absent() {
        let config = load_config(None).unwrap_or_default();
        assert_eq!(config.export.default_format, "json");
    }
}
