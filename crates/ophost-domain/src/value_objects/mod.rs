//! Value objects

pub mod descriptor;

pub use descriptor::{OperationDescriptor, ServiceDescriptor};
