//! Dependency injection
//!
//! The composition root. [`bootstrap::init_app`] assembles the service,
//! its interceptors, and the dispatcher from configuration and returns an
//! [`bootstrap::AppContext`]; [`catalog::build_catalog`] exposes the
//! assembled dill [`dill::Catalog`] directly.

pub mod bootstrap;
pub mod catalog;

pub use bootstrap::{AppContext, init_app};
pub use catalog::build_catalog;
