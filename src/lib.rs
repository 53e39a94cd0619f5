//! Postgres MCP launcher
//!
//! A library for resolving the transport security settings of a Postgres MCP
//! server (DNS-rebinding protection, allowed hosts and origins) from the
//! environment, the command line and built-in defaults, and handing them to
//! the server runtime.

pub mod config;
pub mod transport;
