use service_kernel::{codes, CallError, ErrorInfo};
use thiserror::Error;

use crate::domain::model::Step;

/// Standard result type for gateway workflows.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Terminal failure of a gateway workflow.
///
/// `PartialDeletion` is the documented inconsistency window of the no-log
/// design: dependent resources are gone but the user record remains. It is
/// reported, never silently folded into a generic failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// The request failed fast; no downstream call was made.
    #[error("invalid request: {0}")]
    InvalidRequest(ErrorInfo),

    /// A step failed and the workflow stopped before mutating further state.
    #[error("step '{step}' failed: {error}")]
    StepFailed { step: Step, error: CallError },

    /// Dependent resources were removed, then the final step failed.
    #[error(
        "step '{step}' failed after dependent resources were already removed; \
         a partial deletion occurred: {error}"
    )]
    PartialDeletion { step: Step, error: CallError },

    /// The caller's cancellation signal fired before completion.
    #[error("workflow was cancelled before completion")]
    Cancelled,
}

impl WorkflowError {
    /// The step that failed, when the failure is attributable to one.
    pub const fn step(&self) -> Option<Step> {
        match self {
            Self::StepFailed { step, .. } | Self::PartialDeletion { step, .. } => Some(*step),
            Self::InvalidRequest(_) | Self::Cancelled => None,
        }
    }

    /// Wire-stable projection for the gateway's own caller.
    ///
    /// The underlying `ErrorInfo` is preserved; the failing step and the
    /// partial-deletion marker travel as details.
    pub fn error_info(&self) -> ErrorInfo {
        match self {
            Self::InvalidRequest(info) => info.clone(),
            Self::StepFailed { step, error } => {
                let mut info = error.error_info();
                info.details.insert("step".to_owned(), step.to_string());
                info
            }
            Self::PartialDeletion { step, error } => {
                let mut info = error.error_info();
                info.message = self.to_string();
                info.details.insert("step".to_owned(), step.to_string());
                info.details
                    .insert("partial_deletion".to_owned(), "true".to_owned());
                info
            }
            Self::Cancelled => ErrorInfo::new(codes::CANCELLED, self.to_string()),
        }
    }
}
