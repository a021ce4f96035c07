//! Hosted service implementation

use async_trait::async_trait;
use ophost_domain::error::Result;
use ophost_domain::ports::OperationsService;

/// The concrete service behind the endpoint
///
/// Holds one integer supplied at construction time by the composition
/// root and returns it unchanged from the single operation. The value is
/// injected; the standard way of activating a service per-request could
/// not thread a constructor argument through, which is the reason the
/// composition root builds this instance itself.
#[derive(Debug, Clone, Copy)]
pub struct StoredValueOperations {
    value: i64,
}

impl StoredValueOperations {
    /// Create the service with its constructor-injected value
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

#[async_trait]
impl OperationsService for StoredValueOperations {
    async fn get_value_from_constructor(&self) -> Result<i64> {
        Ok(self.value)
    }
}
