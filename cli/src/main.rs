//! Agent catalog - search and filter a catalog of AI agents

#![cfg_attr(test, allow(clippy::expect_used))]

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use catalog_cli::cli::Cli;
use catalog_cli::output::json::format_error;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so `--json` stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            if json && let Ok(obj) = format_error(&format!("{e:#}"), "error") {
                println!("{obj}");
            }
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
