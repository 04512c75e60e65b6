//! Error types for the chore calendar.

use thiserror::Error;

/// Errors that can occur in chore calendar operations.
///
/// Unknown ids are not errors: mutations on them are no-ops.
#[derive(Error, Debug)]
pub enum ChoreCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error(
        "'{id}' is a generated occurrence and cannot be changed on its own; edit chore '{parent_id}' instead"
    )]
    OccurrenceNotMutable { id: String, parent_id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for chore calendar operations.
pub type ChoreCalResult<T> = Result<T, ChoreCalError>;
