//! Application context: unified state passed to every command handler.
//!
//! `AppContext` is built once in `Cli::run()` from the global flags and the
//! loaded configuration, and handed to command handlers by reference.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::application::services::config_service;
use crate::domain::CatalogConfig;
use crate::infra::{BundledAgentSource, ConfiguredSource, FileAgentSource, YamlConfigStore};
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Data source flags.
pub struct SourceFlags {
    /// Dataset file overriding configuration.
    pub data: Option<PathBuf>,
    /// Config file overriding `CATALOG_CONFIG` and the default location.
    pub config: Option<PathBuf>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    pub output: OutputFlags,
    pub source: SourceFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Configuration store.
    pub config_store: YamlConfigStore,
    /// Effective configuration.
    pub config: CatalogConfig,
    /// Dataset override from `--data`.
    data_override: Option<PathBuf>,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or parsed.
    pub fn new(flags: AppFlags) -> Result<Self> {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        let config_store = flags
            .source
            .config
            .map(YamlConfigStore::with_path)
            .unwrap_or_default();
        let config = config_service::load_config(&config_store)?;

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config_store,
            config,
            data_override: flags.source.data,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Pick the load gateway: `--data`, then `data.path` from config, then
    /// the bundled dataset with the configured delay.
    #[must_use]
    pub fn agent_source(&self) -> ConfiguredSource {
        let path = self
            .data_override
            .clone()
            .or_else(|| self.config.data.path.clone());
        match path {
            Some(path) => ConfiguredSource::File(FileAgentSource::new(path)),
            None => ConfiguredSource::Bundled(BundledAgentSource::new(Duration::from_millis(
                self.config.data.load_delay_ms,
            ))),
        }
    }
}
