//! Mapping between the domain error taxonomy and protocol statuses.
//!
//! The mapping table is fixed and total: every taxonomy member maps to
//! exactly one [`Code`], enforced by the exhaustive `match` below. Failures
//! outside the taxonomy go through [`internal_status`], which never leaks
//! internal text to the caller.

use std::collections::BTreeMap;

use service_kernel::{codes, CallError, DomainError, ErrorInfo};
use tonic::metadata::{MetadataMap, MetadataValue};
use tonic::{Code, Status};

use crate::{ERROR_CODE_KEY, ERROR_DETAILS_KEY};

/// Render a domain error onto the wire.
///
/// Code, message and structured details ride on status metadata so the
/// client can rebuild [`ErrorInfo`] without string parsing. Persistence
/// detail is logged here and leaves the process redacted.
pub fn domain_status(err: &DomainError) -> Status {
    if let DomainError::Persistence { message } = err {
        tracing::error!(detail = %message, "persistence failure crossing the RPC boundary");
    }

    let code = match err {
        DomainError::Validation { .. } => Code::InvalidArgument,
        DomainError::NotFound { .. } => Code::NotFound,
        DomainError::Duplicate { .. } => Code::AlreadyExists,
        DomainError::Persistence { .. } => Code::Internal,
    };

    status_with_info(code, &ErrorInfo::from(err))
}

/// Render a failure outside the taxonomy.
///
/// The full error chain goes to the server log; the wire sees a generic
/// internal status with the reserved `INTERNAL` code.
pub fn internal_status(err: &anyhow::Error) -> Status {
    tracing::error!(error = %err, "unhandled failure crossing the RPC boundary");

    status_with_info(
        Code::Internal,
        &ErrorInfo::new(codes::INTERNAL, "An internal error occurred"),
    )
}

fn status_with_info(code: Code, info: &ErrorInfo) -> Status {
    let mut metadata = MetadataMap::new();

    if let Ok(value) = MetadataValue::try_from(info.code.as_str()) {
        metadata.insert(ERROR_CODE_KEY, value);
    }

    if !info.details.is_empty() {
        if let Ok(encoded) = serde_json::to_vec(&info.details) {
            metadata.insert_bin(ERROR_DETAILS_KEY, MetadataValue::from_bytes(&encoded));
        }
    }

    Status::with_metadata(code, info.message.clone(), metadata)
}

/// Decode a failed call back into a [`CallError`].
///
/// Cancellation and deadline expiry are kept distinguishable from genuine
/// failures. When the structured metadata is present the failure is a
/// domain one; otherwise an infrastructure [`ErrorInfo`] is synthesized
/// with a reserved code, so callers never special-case transport errors.
pub fn decode_failure(status: &Status) -> CallError {
    if matches!(status.code(), Code::Cancelled | Code::DeadlineExceeded) {
        return CallError::Cancelled;
    }

    let metadata = status.metadata();
    if let Some(code) = metadata.get(ERROR_CODE_KEY).and_then(|v| v.to_str().ok()) {
        let mut info = ErrorInfo::new(code, status.message());
        if let Some(raw) = metadata.get_bin(ERROR_DETAILS_KEY) {
            if let Ok(bytes) = raw.to_bytes() {
                if let Ok(details) = serde_json::from_slice::<BTreeMap<String, String>>(&bytes) {
                    info.details = details;
                }
            }
        }
        return CallError::Domain(info);
    }

    let (code, fallback) = match status.code() {
        Code::Unavailable => (codes::UNAVAILABLE, "service unavailable"),
        _ => (codes::INTERNAL, "call failed without a structured payload"),
    };
    let message = if status.message().is_empty() {
        fallback.to_owned()
    } else {
        status.message().to_owned()
    };

    CallError::Infrastructure(ErrorInfo::new(code, message))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn mapping_table_is_total_and_fixed() {
        let cases = [
            (DomainError::validation("email", "empty"), Code::InvalidArgument),
            (DomainError::not_found("User", "u-1"), Code::NotFound),
            (
                DomainError::duplicate("User", "email", "a@b.c"),
                Code::AlreadyExists,
            ),
            (DomainError::persistence("disk full"), Code::Internal),
        ];

        for (err, expected) in cases {
            assert_eq!(domain_status(&err).code(), expected, "for {err:?}");
        }
    }

    #[test]
    fn round_trip_rebuilds_error_info_without_string_parsing() {
        let err = DomainError::not_found("Address", "abc");
        let status = domain_status(&err);

        let decoded = decode_failure(&status);
        let CallError::Domain(info) = decoded else {
            panic!("expected a domain failure, got {decoded:?}");
        };
        assert_eq!(info, ErrorInfo::from(&err));
        assert_eq!(info.message, "Address with ID 'abc' was not found");
        assert_eq!(info.details.get("entity").map(String::as_str), Some("Address"));
    }

    #[test]
    fn persistence_round_trip_stays_redacted() {
        let err = DomainError::persistence("pg: relation orders does not exist");
        let status = domain_status(&err);

        assert!(!status.message().contains("pg:"));

        let decoded = decode_failure(&status);
        assert_eq!(decoded.code(), codes::PERSISTENCE_ERROR);
        assert!(!decoded.error_info().message.contains("relation"));
    }

    #[test]
    fn internal_status_never_leaks_the_original_error() {
        let err = anyhow::anyhow!("secret connection string postgres://admin:hunter2@db");
        let status = internal_status(&err);

        assert_eq!(status.code(), Code::Internal);
        assert!(!status.message().contains("hunter2"));

        let decoded = decode_failure(&status);
        assert_eq!(decoded.code(), codes::INTERNAL);
    }

    #[test]
    fn missing_metadata_synthesizes_infrastructure_info() {
        let status = Status::unavailable("connection refused");
        let decoded = decode_failure(&status);

        assert!(decoded.is_infrastructure());
        assert_eq!(decoded.code(), codes::UNAVAILABLE);

        let status = Status::unknown("");
        let decoded = decode_failure(&status);
        assert_eq!(decoded.code(), codes::INTERNAL);
    }

    #[test]
    fn cancellation_codes_decode_to_cancelled() {
        assert!(decode_failure(&Status::cancelled("caller went away")).is_cancelled());
        assert!(decode_failure(&Status::deadline_exceeded("too slow")).is_cancelled());
    }
}
