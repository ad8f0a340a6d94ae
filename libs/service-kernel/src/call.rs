use thiserror::Error;

use crate::info::{codes, ErrorInfo};

/// Outcome of a cross-service call as seen by the gateway.
///
/// A client never surfaces a raw transport error to its caller: by the time
/// a `ServiceResult` is returned, the failure has been decoded into a
/// [`CallError`], so orchestrators branch on one closed type.
pub type ServiceResult<T> = Result<T, CallError>;

/// Failure arm of [`ServiceResult`].
///
/// `Domain` carries the structured payload the remote service attached;
/// `Infrastructure` is synthesized on this side of the wire when the call
/// failed without one (connection refused, malformed response, redacted
/// internal failure). `Cancelled` is kept separate so orchestrators can
/// distinguish a caller-driven abort from a genuine failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("{0}")]
    Domain(ErrorInfo),

    #[error("{0}")]
    Infrastructure(ErrorInfo),

    #[error("call was cancelled before completion")]
    Cancelled,
}

impl CallError {
    /// Stable code of the underlying failure.
    pub fn code(&self) -> &str {
        match self {
            Self::Domain(info) | Self::Infrastructure(info) => &info.code,
            Self::Cancelled => codes::CANCELLED,
        }
    }

    /// The wire-stable projection, synthesized for the cancelled arm.
    pub fn error_info(&self) -> ErrorInfo {
        match self {
            Self::Domain(info) | Self::Infrastructure(info) => info.clone(),
            Self::Cancelled => ErrorInfo::new(codes::CANCELLED, self.to_string()),
        }
    }

    /// True for a domain `NOT_FOUND`, the idempotent-deletion case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(info) if info.code == codes::NOT_FOUND)
    }

    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub const fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Infrastructure(_))
    }
}
