//! Service contract

use crate::error::Result;
use async_trait::async_trait;

/// The hosted service contract
///
/// One operation: return the integer the implementation was constructed
/// with. Both the in-process implementation and the remote client proxy
/// implement this trait, so call sites cannot tell a local call from a
/// network call.
#[async_trait]
pub trait OperationsService: Send + Sync {
    /// Return the value supplied to the implementation's constructor.
    async fn get_value_from_constructor(&self) -> Result<i64>;
}
