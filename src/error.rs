//! Errors surfaced by the command line front end.
//!
//! Classification and formatting never fail; only user input and the
//! terminal or config file can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Unknown dashboard '{name}'. Valid dashboards: {}", valid.join(", "))]
    UnknownDashboard { name: String, valid: Vec<String> },

    #[error("Unknown tab '{name}' for dashboard '{dashboard}'. Valid tabs: {}", valid.join(", "))]
    UnknownTab {
        dashboard: String,
        name: String,
        valid: Vec<String>,
    },

    #[error("Could not determine the home directory")]
    NoHomeDirectory,

    #[error("Invalid config file: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
