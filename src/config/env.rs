//! Environment variable snapshot.
//!
//! The process environment is read exactly once at startup into an
//! [`EnvSnapshot`]; everything downstream takes the snapshot as a value so
//! resolution stays pure and tests never touch the real environment.

/// Environment variable names recognized by the launcher.
///
/// Each setting has a product-prefixed name and a generic name. The prefixed
/// name is checked first.
pub mod var {
    /// Product-prefixed DNS-rebinding protection toggle.
    pub const DNS_REBINDING_PROTECTION: &str = "POSTGRES_MCP_DNS_REBINDING_PROTECTION";
    /// Generic DNS-rebinding protection toggle.
    pub const GENERIC_DNS_REBINDING_PROTECTION: &str = "MCP_DNS_REBINDING_PROTECTION";
    /// Product-prefixed allowed hosts list.
    pub const ALLOWED_HOSTS: &str = "POSTGRES_MCP_ALLOWED_HOSTS";
    /// Generic allowed hosts list.
    pub const GENERIC_ALLOWED_HOSTS: &str = "MCP_ALLOWED_HOSTS";
    /// Product-prefixed allowed origins list.
    pub const ALLOWED_ORIGINS: &str = "POSTGRES_MCP_ALLOWED_ORIGINS";
    /// Generic allowed origins list.
    pub const GENERIC_ALLOWED_ORIGINS: &str = "MCP_ALLOWED_ORIGINS";
}

/// A raw environment value in both its prefixed and generic spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvPair {
    /// Value of the product-prefixed variable
    pub prefixed: Option<String>,
    /// Value of the generic variable
    pub generic: Option<String>,
}

impl EnvPair {
    /// Creates a pair from optional prefixed and generic values.
    #[must_use]
    pub fn new(prefixed: Option<&str>, generic: Option<&str>) -> Self {
        Self {
            prefixed: prefixed.map(ToString::to_string),
            generic: generic.map(ToString::to_string),
        }
    }

    /// Returns the effective raw value.
    ///
    /// The prefixed variable wins when `is_set` accepts it; otherwise the
    /// generic variable is offered under the same test. The test is what the
    /// consuming setting considers "set" (a recognized boolean, a non-empty
    /// list), so both spellings follow identical precedence rules.
    pub fn effective<F>(&self, is_set: F) -> Option<&str>
    where
        F: Fn(&str) -> bool,
    {
        [self.prefixed.as_deref(), self.generic.as_deref()]
            .into_iter()
            .flatten()
            .find(|raw| is_set(raw))
    }
}

/// Security-related environment values, captured once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// DNS-rebinding protection toggle
    pub dns_rebinding_protection: EnvPair,
    /// Allowed hosts list
    pub allowed_hosts: EnvPair,
    /// Allowed origins list
    pub allowed_origins: EnvPair,
}

impl EnvSnapshot {
    /// Reads the snapshot from the current process environment.
    ///
    /// Variables that are unset or not valid Unicode are treated as absent.
    #[must_use]
    pub fn from_process() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the snapshot from an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pair = |prefixed: &str, generic: &str| EnvPair {
            prefixed: lookup(prefixed),
            generic: lookup(generic),
        };

        Self {
            dns_rebinding_protection: pair(
                var::DNS_REBINDING_PROTECTION,
                var::GENERIC_DNS_REBINDING_PROTECTION,
            ),
            allowed_hosts: pair(var::ALLOWED_HOSTS, var::GENERIC_ALLOWED_HOSTS),
            allowed_origins: pair(var::ALLOWED_ORIGINS, var::GENERIC_ALLOWED_ORIGINS),
        }
    }

    /// Builds the snapshot from `(name, value)` pairs; unknown names are ignored.
    ///
    /// Useful in tests in place of mutating the process environment.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::from_lookup(|name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        })
    }
}
