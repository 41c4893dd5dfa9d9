//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
///
/// User cancellation is NOT an error anywhere in this crate: cancelled
/// dialogs surface as `None` / unchanged values, never as a variant here.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("dialog failed: {context}: {message}")]
    Interaction { context: String, message: String },

    #[error("preferences error: {message}")]
    Preferences { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    /// Wrap a dialog-layer failure (not user cancellation).
    pub fn interaction(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Interaction {
            context: context.into(),
            message: message.into(),
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
