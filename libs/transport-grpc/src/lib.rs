#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

//! Error translation and unary call plumbing for Storefront RPC.
//!
//! The server half ([`status::domain_status`], [`status::internal_status`])
//! is the single choke point through which every failure leaves a service
//! process: domain errors become a protocol status with structured metadata,
//! anything else is logged in full and crosses the wire redacted.
//!
//! The client half ([`status::decode_failure`]) reconstructs the structured
//! payload, so callers always receive a `CallError` and never a raw
//! [`tonic::Status`].

pub mod call;
pub mod client;
pub mod status;

/// ASCII metadata key carrying the stable error code.
pub const ERROR_CODE_KEY: &str = "x-error-code";

/// Binary metadata key carrying the JSON-encoded details map.
pub const ERROR_DETAILS_KEY: &str = "x-error-details-bin";
