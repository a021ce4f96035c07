//! Service descriptor
//!
//! Machine-readable description of a hosted contract, served by the
//! metadata endpoint when metadata publication is enabled.

use serde::{Deserialize, Serialize};

/// Description of a hosted service and its callable operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Logical service name
    pub service: String,
    /// Operations callable at the endpoint
    pub operations: Vec<OperationDescriptor>,
}

/// Description of a single callable operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    /// Wire name of the operation
    pub name: String,
    /// Names of the operation's arguments, in call order
    pub arguments: Vec<String>,
    /// Logical type of the return value
    pub returns: String,
}

impl ServiceDescriptor {
    /// Create a descriptor for a service with the given operations
    pub fn new<S: Into<String>>(service: S, operations: Vec<OperationDescriptor>) -> Self {
        Self {
            service: service.into(),
            operations,
        }
    }

    /// Whether the service exposes the named operation
    pub fn has_operation(&self, name: &str) -> bool {
        self.operations.iter().any(|op| op.name == name)
    }
}

impl OperationDescriptor {
    /// Create a descriptor for a no-argument operation
    pub fn niladic<N, R>(name: N, returns: R) -> Self
    where
        N: Into<String>,
        R: Into<String>,
    {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            returns: returns.into(),
        }
    }
}
