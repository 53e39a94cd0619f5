//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use crate::transport::Transport;

use super::validated::AccessMode;

/// DNS-rebinding protection is on unless something turns it off.
pub const DNS_REBINDING_PROTECTION: bool = true;

/// Default transport.
pub const TRANSPORT: Transport = Transport::Stdio;

/// Default SQL access mode.
pub const ACCESS_MODE: AccessMode = AccessMode::Unrestricted;

/// Default bind host for the SSE transport.
pub const SSE_HOST: &str = "localhost";

/// Default bind port for the SSE transport.
pub const SSE_PORT: u16 = 8000;

/// Default bind host for the streamable HTTP transport.
pub const STREAMABLE_HTTP_HOST: &str = "localhost";

/// Default bind port for the streamable HTTP transport.
pub const STREAMABLE_HTTP_PORT: u16 = 8000;
