//! Transport security configuration.
//!
//! [`SecurityConfig`] is the single value handed to the transport runtime.
//! It is resolved once from the environment snapshot and the extracted CLI
//! arguments and never changes afterwards.

use std::fmt;

use crate::transport::Transport;

use super::args::{ParsedArguments, flag};
use super::defaults;
use super::env::EnvSnapshot;
use super::parse::{parse_bool_env, parse_comma_separated};
use super::resolve::{resolve_allow_list, resolve_dns_protection_enabled};

/// DNS-rebinding protection settings for network transports.
///
/// `None` allow lists mean "not configured": the transport applies its own
/// defaults. When protection is disabled the allow lists are kept but inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityConfig {
    dns_rebinding_protection_enabled: bool,
    allowed_hosts: Option<Vec<String>>,
    allowed_origins: Option<Vec<String>>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            dns_rebinding_protection_enabled: defaults::DNS_REBINDING_PROTECTION,
            allowed_hosts: None,
            allowed_origins: None,
        }
    }
}

impl fmt::Display for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Security {{ dns_rebinding_protection: {}, allowed_hosts: {}, allowed_origins: {} }}",
            self.dns_rebinding_protection_enabled,
            display_list(self.allowed_hosts.as_deref()),
            display_list(self.allowed_origins.as_deref()),
        )
    }
}

impl SecurityConfig {
    /// Assembles a configuration from already-resolved settings.
    ///
    /// Emits a warning if protection is disabled while an allow list is
    /// present. The warning never changes the returned value.
    #[must_use]
    pub fn new(
        dns_rebinding_protection_enabled: bool,
        allowed_hosts: Option<Vec<String>>,
        allowed_origins: Option<Vec<String>>,
    ) -> Self {
        let config = Self {
            dns_rebinding_protection_enabled,
            allowed_hosts,
            allowed_origins,
        };

        if let Some(ignored) = config.ignored_allow_lists() {
            tracing::warn!("{ignored}");
        }

        config
    }

    /// Resolves the configuration from the environment and CLI arguments.
    ///
    /// Per setting, the product-prefixed variable is consulted before the
    /// generic one, then the CLI value:
    ///
    /// - protection: a recognized environment boolean overrides
    ///   `--disable-dns-rebinding-protection`
    /// - allow lists: a non-empty environment list replaces the CLI list
    ///
    /// Ignored allow lists are reported at WARN level for network
    /// transports and at DEBUG level for stdio, which never reads them.
    #[must_use]
    pub fn resolve(env: &EnvSnapshot, args: &ParsedArguments, transport: Transport) -> Self {
        let protection_env = env
            .dns_rebinding_protection
            .effective(|raw| !parse_bool_env(Some(raw)).is_unset());
        let hosts_env = env.allowed_hosts.effective(is_non_empty_list);
        let origins_env = env.allowed_origins.effective(is_non_empty_list);

        let config = Self {
            dns_rebinding_protection_enabled: resolve_dns_protection_enabled(
                protection_env,
                args.disable_dns_rebinding_protection,
            ),
            allowed_hosts: resolve_allow_list(hosts_env, args.allowed_hosts.as_deref()),
            allowed_origins: resolve_allow_list(origins_env, args.allowed_origins.as_deref()),
        };

        if let Some(ignored) = config.ignored_allow_lists() {
            if transport.is_network() {
                tracing::warn!("{ignored}");
            } else {
                tracing::debug!("{transport} transport: {ignored}");
            }
        }

        config
    }

    /// Whether the transport should reject requests with unlisted
    /// Host/Origin headers.
    #[must_use]
    pub const fn dns_rebinding_protection_enabled(&self) -> bool {
        self.dns_rebinding_protection_enabled
    }

    /// Allowed `Host` header values, if configured.
    #[must_use]
    pub fn allowed_hosts(&self) -> Option<&[String]> {
        self.allowed_hosts.as_deref()
    }

    /// Allowed `Origin` header values, if configured.
    #[must_use]
    pub fn allowed_origins(&self) -> Option<&[String]> {
        self.allowed_origins.as_deref()
    }

    /// Returns the diagnostic for allow lists that have no effect.
    ///
    /// `Some` when protection is disabled and at least one allow list is
    /// configured.
    #[must_use]
    pub fn ignored_allow_lists(&self) -> Option<IgnoredAllowLists> {
        if self.dns_rebinding_protection_enabled {
            return None;
        }

        let hosts = self.allowed_hosts.is_some();
        let origins = self.allowed_origins.is_some();
        (hosts || origins).then_some(IgnoredAllowLists { hosts, origins })
    }
}

/// Allow lists configured while DNS-rebinding protection is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoredAllowLists {
    /// An allowed hosts list was configured
    pub hosts: bool,
    /// An allowed origins list was configured
    pub origins: bool,
}

impl fmt::Display for IgnoredAllowLists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let configured = match (self.hosts, self.origins) {
            (true, true) => "hosts and origins",
            (true, false) => "hosts",
            (false, true) => "origins",
            (false, false) => "none",
        };

        write!(
            f,
            "DNS-rebinding protection is disabled; {}/{} ignored (configured: {configured})",
            flag::ALLOWED_HOSTS,
            flag::ALLOWED_ORIGINS
        )
    }
}

fn is_non_empty_list(raw: &str) -> bool {
    parse_comma_separated(&[Some(raw)]).is_some()
}

fn display_list(list: Option<&[String]>) -> String {
    list.map_or_else(|| "default".to_string(), |items| format!("[{}]", items.join(", ")))
}
