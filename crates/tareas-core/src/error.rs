//! Error types for the tareas library.
//!
//! Form validation failures are not errors: they travel as
//! [`crate::validation::ValidationError`] values attached to form controls.
//! The variants below cover the remaining failure paths (bad command input,
//! converting form values into models, lookups the caller asked to be strict).

use thiserror::Error;

/// Error type for all non-validation failures.
#[derive(Error, Debug)]
pub enum TareaError {
    /// Task not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: u64 },
    /// Invalid input for a field (unparseable status, date, person spec...)
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A form value could not be converted into a model
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TareaError {
        TareaError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TareaError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Result type alias for tareas operations
pub type Result<T> = std::result::Result<T, TareaError>;
