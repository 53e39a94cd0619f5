//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use postgres_mcp::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - empty connection string, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Usage error (exit code 2) - missing/extra positional, missing flag value, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn usage_error() -> ExitCode {
        ExitCode::from(2)
    }

    /// Runtime error (exit code 3) - the server runtime failed.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(3)
    }
}

/// Prints helpful hints for configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    if error.is_usage() {
        eprintln!("\nRun 'postgres-mcp --help' for usage.");
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr; stdout belongs to the stdio transport.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
