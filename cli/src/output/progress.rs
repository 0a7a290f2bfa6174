//! Spinner shown while a delayed dataset load is pending.

#![allow(clippy::expect_used)] // Templates are compile-time constants

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize as _;

use crate::application::services::catalog_session::LoadOutcome;
use crate::output::Styles;

/// Start the load spinner.
#[must_use]
pub fn load_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"])
            .template("{spinner:.cyan} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Loading agents...");
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Replace the spinner with the load result. A skipped load leaves no line.
pub fn finish_load(pb: &ProgressBar, outcome: LoadOutcome, styles: &Styles) {
    let msg = match outcome {
        LoadOutcome::Loaded(count) => format!("{} Loaded {count} agents", "✓".style(styles.success)),
        LoadOutcome::Failed => format!("{} Could not load agents", "✗".style(styles.error)),
        LoadOutcome::Skipped => {
            pb.finish_and_clear();
            return;
        }
    };
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{msg}")
            .expect("valid template"),
    );
    pb.finish_with_message(msg);
}
