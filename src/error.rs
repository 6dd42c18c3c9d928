//! Error types for the simulator.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised before a simulation starts.
///
/// A policy never fails once its input has been accepted, so every variant
/// here is either a configuration problem or an input problem.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Round robin quantum must be strictly positive.
    #[error("round robin requires a positive quantum, got {0}")]
    InvalidQuantum(i64),

    /// Round robin was selected without a quantum.
    #[error("round robin requires a quantum")]
    MissingQuantum,

    /// The input stream could not be parsed.
    #[error("input parse error: {0}")]
    Parse(String),

    /// Parsed records failed validation.
    #[error("invalid process records: {}", join_messages(.0))]
    InvalidProcess(Vec<ValidationError>),

    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScheduleError {
    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for simulator operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
