//! Application execution logic.
//!
//! Hands the validated configuration to the server runtime and keeps it
//! running until the runtime stops or a shutdown signal arrives.

use std::future::Future;

use thiserror::Error;
use tokio::signal;

use postgres_mcp::config::ServerConfig;
use postgres_mcp::transport::{Launch, TransportError, TransportRuntime};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The server runtime failed.
    #[error("Server runtime failed: {0}")]
    Transport(#[source] TransportError),
}

/// Runs the server until it stops or Ctrl+C is received.
///
/// # Errors
///
/// Returns an error if the runtime fails to start or stops with an error.
///
/// Excluded from coverage - requires real signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute<R: TransportRuntime>(
    config: ServerConfig,
    runtime: &R,
) -> Result<(), RunError> {
    execute_until(config, runtime, shutdown_signal()).await
}

/// Runs the server until it stops or `shutdown` completes.
///
/// A clean runtime exit and a shutdown both return `Ok(())`.
async fn execute_until<R, S>(config: ServerConfig, runtime: &R, shutdown: S) -> Result<(), RunError>
where
    R: TransportRuntime,
    S: Future<Output = ()>,
{
    if !config.security.dns_rebinding_protection_enabled() && config.transport.is_network() {
        tracing::info!(
            "DNS-rebinding protection disabled for {} transport",
            config.transport
        );
    }

    let launch = Launch::from(config);
    tracing::debug!("Starting {} transport", launch.transport);

    tokio::select! {
        result = runtime.run(launch) => {
            result.map_err(RunError::Transport)?;
            tracing::info!("Server runtime stopped");
            Ok(())
        }
        () = shutdown => {
            tracing::info!("Shutdown signal received, stopping");
            Ok(())
        }
    }
}

/// Resolves when Ctrl+C is received.
///
/// If the handler cannot be installed the future never resolves, leaving the
/// runtime to run until it stops on its own.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
