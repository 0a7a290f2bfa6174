//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags, SourceFlags};
use crate::commands;

/// Search and filter a catalog of AI agents
#[derive(Parser)]
#[command(
    name = "agent-catalog",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (`NO_COLOR` is honored too)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Load agents from this JSON file instead of the bundled dataset
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Read configuration from this file (default: `$CATALOG_CONFIG`, then
    /// `~/.agent-catalog/config.yaml`)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List agents matching the given filters
    List(commands::list::ListArgs),

    /// List the categories present in the catalog
    Categories,

    /// Inspect configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            data,
            config,
            command,
        } = self;

        let app = AppContext::new(AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            source: SourceFlags { data, config },
        })?;

        match command {
            Command::List(args) => commands::list::run(&app, args).await,
            Command::Categories => commands::categories::run(&app).await,
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Version => {
                commands::version::run(&app);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
