//! Orders service.
//!
//! Owns the order lifecycle. Cancellation is the detachment step other
//! workflows rely on: cancelling an already-cancelled order succeeds,
//! cancelling a shipped or delivered one is a validation failure.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod domain;
pub mod infra;
