//! Configuration layer for the Postgres MCP launcher.
//!
//! This module provides:
//! - Primitive value parsers ([`parse_bool_env`], [`parse_comma_separated`])
//! - Per-setting source precedence ([`resolve_dns_protection_enabled`], [`resolve_allow_list`])
//! - Command-line extraction ([`extract`], [`ParsedArguments`], [`Invocation`])
//! - The environment snapshot ([`EnvSnapshot`])
//! - Transport security settings ([`SecurityConfig`])
//! - Validated launcher configuration ([`ServerConfig`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Security settings come from three sources:
//!
//! 1. **Environment variables** - `POSTGRES_MCP_*`, then the generic `MCP_*` spelling
//! 2. **CLI arguments** - `--disable-dns-rebinding-protection`, `--allowed-hosts`, `--allowed-origins`
//! 3. **Built-in defaults** - protection enabled, allow lists left to the transport
//!
//! DNS-rebinding protection: a recognized environment boolean **overrides** the
//! CLI switch. Unrecognized or empty values count as unset.
//!
//! Allow lists: a non-empty environment list **replaces** the CLI list entirely
//! (not merged).
//!
//! All other options (transport, access mode, host/port) are CLI-only with
//! built-in defaults.
//!
//! # Disabled Protection
//!
//! Disabling protection while also passing allow lists is not an error. The
//! lists are kept in [`SecurityConfig`] but have no effect, and a warning is
//! logged for network transports (a debug message for stdio).

mod args;
pub mod defaults;
pub mod env;
mod error;
mod parse;
mod resolve;
mod security;
mod validated;

#[cfg(test)]
mod security_tests;

pub use args::{Invocation, ParsedArguments, command, extract, flag, help_text, version_text};
pub use env::EnvSnapshot;
pub use error::{ConfigError, UsageError};
pub use parse::{BoolSetting, parse_bool_env, parse_comma_separated};
pub use resolve::{resolve_allow_list, resolve_dns_protection_enabled};
pub use security::{IgnoredAllowLists, SecurityConfig};
pub use validated::{AccessMode, DatabaseUrl, ServerConfig};
