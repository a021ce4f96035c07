//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the ophost workspace
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error, surfaced at composition time
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The listener could not bind its address
    #[error("Binding error: {message}")]
    Binding {
        /// Description of the binding error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Dispatch of an operation the service does not expose
    #[error("Operation not found: {operation}")]
    OperationNotFound {
        /// The requested operation name
        operation: String,
    },

    /// A fault surfaced from the remote side of a call
    #[error("Remote fault: {message}")]
    Remote {
        /// Fault message as reported by the remote endpoint
        message: String,
        /// Full fault detail, present only when the endpoint publishes it
        detail: Option<String>,
    },

    /// Network-related error on the client side
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with a source
    pub fn configuration_with<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a binding error
    pub fn binding<S: Into<String>>(message: S) -> Self {
        Self::Binding {
            message: message.into(),
            source: None,
        }
    }

    /// Create an operation-not-found error
    pub fn operation_not_found<S: Into<String>>(operation: S) -> Self {
        Self::OperationNotFound {
            operation: operation.into(),
        }
    }

    /// Create a remote fault error
    pub fn remote<S: Into<String>>(message: S, detail: Option<String>) -> Self {
        Self::Remote {
            message: message.into(),
            detail,
        }
    }

    /// Create a network error with a source
    pub fn network<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
