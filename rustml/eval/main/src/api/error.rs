//! Error types for evaluation operations

use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while loading inputs or generating responses.
///
/// Answer extraction and scoring never fail: a missing number is an empty
/// answer and an unparsable one falls back to string comparison.
#[derive(Error, Debug)]
pub enum EvalError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Generation error: {0}")]
    GenerationError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
