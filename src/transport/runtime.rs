//! Launch request and runtime trait.

use std::fmt;
use std::future::Future;

use crate::config::{AccessMode, DatabaseUrl, SecurityConfig, ServerConfig};

use super::{Transport, TransportError};

/// Host and port a network transport listens on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindAddress {
    /// Host name or IP address
    pub host: String,
    /// TCP port
    pub port: u16,
}

impl BindAddress {
    /// Creates a bind address.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for BindAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Everything the server runtime needs to start serving.
///
/// The [`SecurityConfig`] is passed through unchanged; the runtime owns it
/// for the rest of the process lifetime.
#[derive(Debug, Clone)]
pub struct Launch {
    /// Transport to serve over
    pub transport: Transport,
    /// Listen address; `None` for stdio
    pub bind: Option<BindAddress>,
    /// Database to connect to
    pub database_url: DatabaseUrl,
    /// SQL access mode
    pub access_mode: AccessMode,
    /// DNS-rebinding protection settings
    pub security: SecurityConfig,
}

impl From<ServerConfig> for Launch {
    fn from(config: ServerConfig) -> Self {
        Self {
            transport: config.transport,
            bind: config.bind,
            database_url: config.database_url,
            access_mode: config.access_mode,
            security: config.security,
        }
    }
}

/// The external server runtime.
///
/// Implementations start the database pool and the selected transport and
/// serve until the transport stops. Callers race the returned future against
/// shutdown signals, so implementations do not need to handle them.
pub trait TransportRuntime: Send + Sync {
    /// Serves the MCP protocol with the given launch settings.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails to start or stops
    /// with an error.
    fn run(&self, launch: Launch) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// Runtime that logs the launch and then waits forever.
///
/// Stands in for the server runtime when none is linked in, so the launcher
/// can be exercised end to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingRuntime;

impl TransportRuntime for PendingRuntime {
    async fn run(&self, launch: Launch) -> Result<(), TransportError> {
        match &launch.bind {
            Some(bind) => tracing::info!(
                "{} transport ready on {bind} ({})",
                launch.transport,
                launch.security
            ),
            None => tracing::info!("{} transport ready", launch.transport),
        }

        std::future::pending::<()>().await;
        Ok(())
    }
}
