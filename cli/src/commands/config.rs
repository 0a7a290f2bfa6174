//! `agent-catalog config`: inspect configuration.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::application::services::config_service;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Print one configuration value
    Get {
        /// Configuration key, e.g. `data.path`
        key: String,
    },
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the key is unknown or the configuration cannot be
/// loaded.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Show => {
            let path = app.config_store.path()?;
            app.renderer().render_config(&app.config, &path)?;
        }
        ConfigCommand::Get { key } => {
            let value = config_service::get_config_value(&app.config_store, &key)?;
            app.renderer().render_config_value(&key, value.as_deref())?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
