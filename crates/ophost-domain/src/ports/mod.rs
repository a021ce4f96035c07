//! Port traits
//!
//! The seams between layers: the service contract implemented by the
//! infrastructure layer (and by the remote client proxy), and the
//! interception port used to wrap dispatched calls.

pub mod interception;
pub mod operations;

pub use interception::{Interceptor, Invocation};
pub use operations::OperationsService;
