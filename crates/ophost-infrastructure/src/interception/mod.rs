//! Call interception
//!
//! The decorator chain wrapped around dispatched calls:
//!
//! - [`CallRecorder`] - shared handle recording the most recently
//!   intercepted operation name
//! - [`RecordingInterceptor`] - logs and records every call, then
//!   forwards it
//! - [`OperationDispatcher`] - routes a named operation through the
//!   attached interceptors to the service implementation

pub mod dispatcher;
pub mod interceptor;
pub mod recorder;

pub use dispatcher::OperationDispatcher;
pub use interceptor::RecordingInterceptor;
pub use recorder::CallRecorder;
