//! Error types for the transport runtime boundary.

use thiserror::Error;

use super::Transport;

/// Error returned by a [`TransportRuntime`](super::TransportRuntime).
#[derive(Debug, Error)]
pub enum TransportError {
    /// The runtime could not start serving.
    #[error("Failed to start {transport} transport: {reason}")]
    Startup {
        /// Transport that failed
        transport: Transport,
        /// Reason for the failure
        reason: String,
    },

    /// The runtime stopped with an error after starting.
    #[error("{transport} transport terminated: {source}")]
    Terminated {
        /// Transport that terminated
        transport: Transport,
        /// Underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
