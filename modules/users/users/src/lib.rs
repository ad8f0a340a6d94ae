//! Users service.
//!
//! Validates and persists user accounts; exposed through the
//! [`users_sdk::UserService`] RPC contract.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod domain;
pub mod infra;
