//! Output styles using owo-colors stylesheet pattern

use catalog_common::AgentStatus;
use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Success messages (green)
    pub success: Style,
    /// Warning messages (yellow)
    pub warning: Style,
    /// Error messages (red)
    pub error: Style,
    /// Info messages (blue)
    pub info: Style,
    /// Dimmed/secondary text
    pub dim: Style,
    /// Bold text
    pub bold: Style,
    /// Headers/section titles
    pub header: Style,
    /// `Active` status badge
    pub status_active: Style,
    /// `Beta` status badge
    pub status_beta: Style,
    /// `Archived` status badge
    pub status_archived: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.error = Style::new().red();
        self.info = Style::new().blue();
        self.dim = Style::new().dimmed();
        self.bold = Style::new().bold();
        self.header = Style::new().bold().cyan();
        self.status_active = Style::new().bold().green();
        self.status_beta = Style::new().bold().yellow();
        self.status_archived = Style::new().dimmed();
    }

    /// Badge style for a record status.
    #[must_use]
    pub fn status(&self, status: AgentStatus) -> Style {
        match status {
            AgentStatus::Active => self.status_active,
            AgentStatus::Beta => self.status_beta,
            AgentStatus::Archived => self.status_archived,
        }
    }
}
