use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Stable error codes shared by every service and the gateway.
///
/// The first four mirror the [`DomainError`] taxonomy. The rest are reserved
/// for failures synthesized at the transport boundary, where no structured
/// payload from the remote side is available.
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const DUPLICATE: &str = "DUPLICATE";
    pub const PERSISTENCE_ERROR: &str = "PERSISTENCE_ERROR";

    /// The remote side failed without a structured payload.
    pub const INTERNAL: &str = "INTERNAL";
    /// The remote side could not be reached at all.
    pub const UNAVAILABLE: &str = "UNAVAILABLE";
    /// The call observed cancellation or deadline expiry.
    pub const CANCELLED: &str = "CANCELLED";
}

/// Redacted message used when a persistence failure crosses a trust boundary.
pub(crate) const REDACTED_PERSISTENCE_MESSAGE: &str = "A storage failure occurred";

/// Wire-stable projection of a service failure.
///
/// `code` is the cross-process contract clients branch on; `message` is
/// human-readable and may change without breaking anyone; `details` carries
/// the structured fields of the originating error. The gateway never needs
/// to know a service's concrete error type; this projection is all that
/// crosses the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl ErrorInfo {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Projection of a domain error into its wire form.
///
/// Persistence failures keep their code but lose their message here: the
/// original detail belongs in the server log, not on the wire.
impl From<&DomainError> for ErrorInfo {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation { field, reason } => {
                ErrorInfo::new(err.code(), err.to_string())
                    .with_detail("field", field.clone())
                    .with_detail("reason", reason.clone())
            }
            DomainError::NotFound { entity, id } => ErrorInfo::new(err.code(), err.to_string())
                .with_detail("entity", entity.clone())
                .with_detail("id", id.clone()),
            DomainError::Duplicate {
                entity,
                field,
                value,
            } => ErrorInfo::new(err.code(), err.to_string())
                .with_detail("entity", entity.clone())
                .with_detail("field", field.clone())
                .with_detail("value", value.clone()),
            DomainError::Persistence { .. } => {
                ErrorInfo::new(err.code(), REDACTED_PERSISTENCE_MESSAGE)
            }
        }
    }
}
