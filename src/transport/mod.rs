//! Boundary to the external MCP server runtime.
//!
//! This module provides:
//! - The transport selection ([`Transport`]) and listen address ([`BindAddress`])
//! - The launch request handed to the runtime ([`Launch`])
//! - The runtime abstraction ([`TransportRuntime`]) and its errors ([`TransportError`])
//! - A placeholder runtime that waits for shutdown ([`PendingRuntime`])
//!
//! The protocols themselves (stdio, SSE, streamable HTTP) and the database
//! pool live behind [`TransportRuntime`]; this crate only decides what to
//! pass across.

mod error;
mod runtime;


use std::fmt;

use clap::ValueEnum;

pub use error::TransportError;
pub use runtime::{BindAddress, Launch, PendingRuntime, TransportRuntime};

/// Transport the MCP server is served over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Transport {
    /// Standard input/output; no network listener
    Stdio,
    /// Server-sent events over HTTP
    Sse,
    /// Streamable HTTP
    StreamableHttp,
}

impl Transport {
    /// Returns true if this transport listens on a network socket, which is
    /// where DNS-rebinding protection applies.
    #[must_use]
    pub const fn is_network(self) -> bool {
        !matches!(self, Self::Stdio)
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => write!(f, "stdio"),
            Self::Sse => write!(f, "sse"),
            Self::StreamableHttp => write!(f, "streamable-http"),
        }
    }
}
