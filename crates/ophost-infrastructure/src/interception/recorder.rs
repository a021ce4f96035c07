//! Call recorder

use std::sync::{Arc, PoisonError, RwLock};

/// Shared record of the most recently intercepted operation name
///
/// Cloning the recorder yields another handle onto the same state, so
/// the interceptor and any observer (a test scenario, typically) see the
/// same value. The empty string is the reset state. Writes are
/// last-write-wins; the lock only makes concurrent access well-defined.
#[derive(Debug, Clone, Default)]
pub struct CallRecorder {
    most_recent: Arc<RwLock<String>>,
}

impl CallRecorder {
    /// Create a recorder in the reset state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the name of an intercepted operation
    pub fn record(&self, operation: &str) {
        let mut most_recent = self
            .most_recent
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        operation.clone_into(&mut most_recent);
    }

    /// Name of the most recently intercepted operation
    ///
    /// Empty until a call has been intercepted or after [`reset`].
    ///
    /// [`reset`]: CallRecorder::reset
    pub fn most_recent(&self) -> String {
        self.most_recent
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clear the record back to the reset state
    pub fn reset(&self) {
        self.most_recent
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
