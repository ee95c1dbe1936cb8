//! Error types for meeting operations
//!
//! Every store failure is trapped by the service and translated into one of
//! these kinds; callers never see a raw store error.

use thiserror::Error;

/// Errors surfaced by `MeetingService`
#[derive(Debug, Error)]
pub enum MeetingError {
    /// A reference field is not a well-formed identifier
    #[error("Invalid {field} value")]
    InvalidReference { field: &'static str },

    /// The requested meeting does not exist
    #[error("Meeting not found")]
    NotFound,

    /// A bulk delete matched zero meetings
    #[error("No meetings found to delete")]
    NothingToDelete,

    /// The underlying store failed
    #[error("{message}: {details}")]
    StoreFailure {
        message: &'static str,
        details: String,
    },
}

impl MeetingError {
    pub fn invalid(field: &'static str) -> Self {
        MeetingError::InvalidReference { field }
    }

    /// Wrap a store error with the message for the failing operation
    pub fn store(message: &'static str, err: anyhow::Error) -> Self {
        MeetingError::StoreFailure {
            message,
            details: format!("{:#}", err),
        }
    }
}

pub type MeetingResult<T> = Result<T, MeetingError>;
