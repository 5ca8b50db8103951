//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while turning calendar dates into a time window
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Invalid date format: {0}. Please use YYYY-MM-DD format.")]
    InvalidFormat(String),

    #[error("Invalid date: {0}. Please check the date values.")]
    InvalidDate(String),

    #[error("Start date must be before end date")]
    InvalidRange { start: i64, end: i64 },
}

/// Errors that can occur while fetching transactions from the explorer
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid explorer response: {0}")]
    InvalidResponse(String),

    #[error("Etherscan API error: {0}")]
    Upstream(String),
}

/// Errors that end an analysis run
///
/// Every variant is caught at the entry point and folded into the
/// `{ success: false, message, data: null }` outcome.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid wallet address format")]
    InvalidAddress(String),

    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("No transactions found in the specified date range")]
    EmptyResult,
}

/// Errors found when re-checking a saved report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Field {field} is not a decimal integer: {value:?}")]
    InvalidAmount { field: String, value: String },

    #[error("Missing method category: {0}")]
    MissingCategory(String),

    #[error("Inconsistent report: {0}")]
    Inconsistent(String),
}

/// Errors that can occur during report file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
