//! Recording interceptor

use super::recorder::CallRecorder;
use async_trait::async_trait;
use ophost_domain::error::Result;
use ophost_domain::ports::{Interceptor, Invocation};
use serde_json::Value;
use tracing::info;

/// Interceptor that records and logs every dispatched call
///
/// Writes the operation name into the shared [`CallRecorder`], emits a
/// log line naming it, and forwards the call. Failures from the wrapped
/// call pass through untouched.
pub struct RecordingInterceptor {
    recorder: CallRecorder,
}

impl RecordingInterceptor {
    /// Create an interceptor writing into the given recorder
    pub fn new(recorder: CallRecorder) -> Self {
        Self { recorder }
    }
}

#[async_trait]
impl Interceptor for RecordingInterceptor {
    async fn intercept(&self, invocation: Invocation<'_>) -> Result<Value> {
        let operation = invocation.operation().to_string();
        self.recorder.record(&operation);
        info!(operation = %operation, "Operation is about to be called");
        invocation.proceed().await
    }
}
