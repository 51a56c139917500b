//! Error types for the daily totals pipeline.

use crate::transaction::FIELD_COUNT;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Reasons a single input line cannot become a `Transaction`.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Line did not split into `timestamp,origin,destination,amount`
    #[error("expected {expected} fields, found {found}", expected = FIELD_COUNT)]
    FieldCount { found: usize },

    /// First field does not match `YYYY-MM-DD HH:MM:SS UTC`
    #[error("invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },

    /// Fourth field is not a decimal number
    #[error("invalid amount '{value}': {source}")]
    Amount {
        value: String,
        source: std::num::ParseFloatError,
    },
}

/// Errors that abort a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be parsed; the whole batch is rejected
    #[error("Invalid transaction at line {row}: {source}")]
    InvalidRecord { row: usize, source: ParseError },

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: daily-totals <input.csv> [output.jsonl]")]
    MissingArgument,
}
