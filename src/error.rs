//! Error types for the ownership benchmark.

use thiserror::Error;

/// Result type for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Failures raised by the variable and table providers or the driver.
///
/// Any of these aborts the run: a benchmark with a failed trial is invalid.
#[derive(Debug, Error, PartialEq)]
pub enum BenchError {
    #[error("Duplicate key in table: {key}")]
    DuplicateKey { key: i64 },

    #[error("Duplicate label '{label}' in variable '{variable}'")]
    DuplicateLabel { variable: String, label: String },

    #[error("No samples recorded")]
    EmptyAccumulator,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
