//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::SessionStatus;
use crate::value_objects::RecordId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Cannot change session status from {from} to {to}")]
    InvalidStatusTransition {
        from: SessionStatus,
        to: SessionStatus,
    },

    #[error("Referenced member does not exist: {0}")]
    UnknownMember(RecordId),

    #[error("Referenced exercise does not exist: {0}")]
    UnknownExercise(RecordId),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Validation
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",
            Self::UnknownMember(_) => "INVALID_MEMBER_REFERENCE",
            Self::UnknownExercise(_) => "INVALID_EXERCISE_REFERENCE",

            // Conflict
            Self::EmailAlreadyExists(_) => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidStatusTransition { .. }
                | Self::UnknownMember(_)
                | Self::UnknownExercise(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists(_))
    }
}
