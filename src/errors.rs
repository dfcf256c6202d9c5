use std::result::Result as StdResult;

use thiserror::Error;

/// Error type shared by the aggregation, forecasting, and configuration layers.
#[derive(Debug, Error, PartialEq)]
pub enum InsightError {
    #[error("Invalid date format: `{0}` (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, InsightError>;

impl From<std::io::Error> for InsightError {
    fn from(err: std::io::Error) -> Self {
        InsightError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for InsightError {
    fn from(err: serde_json::Error) -> Self {
        InsightError::Storage(err.to_string())
    }
}

/// Failures surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] InsightError),
    #[error(transparent)]
    Service(#[from] crate::core::services::ServiceError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Core(err.into())
    }
}
