//! Gateway orchestrators.
//!
//! The gateway owns no entities of its own; it sequences calls across the
//! bounded-context clients and decides what success means when steps
//! partially fail. Workflow state lives for one invocation only; there is
//! no durable step log, and no compensation of already-succeeded steps.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod domain;

pub use domain::error::{WorkflowError, WorkflowResult};
pub use domain::model::{DeletionReport, Step, StepRecord, UserOverview};
pub use domain::Service;
