//! Domain layer for ophost
//!
//! Core contracts and types shared by every other layer:
//!
//! - [`ports`] - the service contract and the interception port
//! - [`value_objects`] - the serializable service descriptor
//! - [`error`] - the workspace-wide error type
//!
//! This crate has no I/O dependencies. Implementations live in
//! `ophost-infrastructure`; transports live in `ophost-server`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
