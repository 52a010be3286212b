//! CLI error handling

use thiserror::Error;

use domain_dashboard::DashboardError;

/// Errors raised while preparing the dashboard report
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read records from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid records: {0}")]
    Records(#[from] DashboardError),

    #[error("Invalid value for {setting}: {reason}")]
    InvalidSetting { setting: &'static str, reason: String },

    #[error("Failed to render report: {0}")]
    Render(#[from] std::fmt::Error),
}

impl CliError {
    /// Creates an invalid setting error
    pub fn invalid_setting(setting: &'static str, reason: impl ToString) -> Self {
        CliError::InvalidSetting {
            setting,
            reason: reason.to_string(),
        }
    }
}
