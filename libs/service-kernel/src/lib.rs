//! Shared result and error model for Storefront services.
//!
//! Every domain service handler returns [`DomainResult<T>`], carrying a
//! [`DomainError`] from the closed cross-service taxonomy. The gateway side
//! of a call works with [`ServiceResult<T>`], whose failure arm is a
//! [`CallError`] wrapping the wire-stable [`ErrorInfo`] projection.
//!
//! This crate is dependency-light on purpose: it is the contract both sides
//! of the RPC boundary agree on, and it must not pull transport concerns in.

mod call;
mod error;
mod info;

pub use call::{CallError, ServiceResult};
pub use error::{DomainError, DomainResult};
pub use info::{codes, ErrorInfo};
