use std::fmt::Display;

use thiserror::Error;

use crate::info::codes;

/// Standard result type for domain service handlers.
///
/// Handlers return this to their in-process callers; it never crosses the
/// wire itself. The failure arm is always a member of the closed
/// [`DomainError`] taxonomy, so the translation layer can map it to a
/// protocol status exhaustively.
pub type DomainResult<T> = Result<T, DomainError>;

/// Closed taxonomy of expected domain failures.
///
/// Each variant renders its message deterministically from its fields, and
/// [`DomainError::code`] is the stable machine-readable contract that
/// survives the process boundary. Messages may be reworded; codes may not.
///
/// Transport concerns (status codes, metadata) deliberately do not appear
/// here; see the `transport-grpc` crate for the boundary mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A request field failed validation.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// The addressed entity does not exist.
    #[error("{entity} with ID '{id}' was not found")]
    NotFound { entity: String, id: String },

    /// A uniqueness constraint was violated.
    #[error("{entity} with {field} '{value}' already exists")]
    Duplicate {
        entity: String,
        field: String,
        value: String,
    },

    /// The storage layer failed. The message is for server-side logs only
    /// and is redacted before leaving the process.
    #[error("Persistence failure: {message}")]
    Persistence { message: String },
}

impl DomainError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, id: impl Display) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn duplicate(
        entity: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Duplicate {
            entity: entity.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this variant.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => codes::VALIDATION_ERROR,
            Self::NotFound { .. } => codes::NOT_FOUND,
            Self::Duplicate { .. } => codes::DUPLICATE,
            Self::Persistence { .. } => codes::PERSISTENCE_ERROR,
        }
    }
}
