//! Postgres MCP launcher
//!
//! Entry point for the postgres-mcp application.

use postgres_mcp::config::{ConfigError, Invocation, ServerConfig, extract, help_text, version_text};
use postgres_mcp::transport::PendingRuntime;
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let args = match extract(&argv) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            println!("{}", help_text());
            return exit_code::SUCCESS;
        }
        Ok(Invocation::Version) => {
            print!("{}", version_text());
            return exit_code::SUCCESS;
        }
        Err(e) => {
            let error = ConfigError::from(e);
            eprintln!("Usage error: {error}");
            print_config_hint(&error);
            return exit_code::usage_error();
        }
    };

    // Logging must be up before resolution so the ignored-flags warning is visible
    setup_tracing(args.verbose);

    let config = match ServerConfig::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return if e.is_usage() {
                exit_code::usage_error()
            } else {
                exit_code::CONFIG_ERROR
            };
        }
    };

    tracing::info!("{config}");

    run_application(config)
}

/// Runs the server runtime with the given configuration.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(config: ServerConfig) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    match runtime.block_on(run::execute(config, &PendingRuntime)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}
