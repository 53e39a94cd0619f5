//! Per-setting precedence between environment and CLI values.
//!
//! The two rules here deliberately differ:
//!
//! - Booleans: a recognized environment value **overrides** the CLI flag.
//!   Disabling a security control from the command line must not silently win
//!   over an explicit environment directive.
//! - Lists: a non-empty environment list **replaces** the CLI list entirely
//!   (no merging). An unset environment list falls through to the CLI list,
//!   then to `None`.

use super::parse::{parse_bool_env, parse_comma_separated};

/// Resolves whether DNS-rebinding protection is enabled.
///
/// Returns the environment value when it is recognized as a boolean,
/// otherwise `!cli_disable_flag`.
///
/// # Example
///
/// ```
/// use postgres_mcp::config::resolve_dns_protection_enabled;
///
/// assert!(resolve_dns_protection_enabled(Some("true"), true));
/// assert!(!resolve_dns_protection_enabled(None, true));
/// assert!(resolve_dns_protection_enabled(Some("maybe"), false));
/// ```
#[must_use]
pub fn resolve_dns_protection_enabled(env_value: Option<&str>, cli_disable_flag: bool) -> bool {
    parse_bool_env(env_value)
        .value()
        .unwrap_or(!cli_disable_flag)
}

/// Resolves an allow list (hosts or origins).
///
/// The environment list wins whenever it yields at least one token. An
/// absent, empty or all-separator environment value falls back to the CLI
/// list. `None` means downstream defaults apply.
///
/// # Example
///
/// ```
/// use postgres_mcp::config::resolve_allow_list;
///
/// let hosts = resolve_allow_list(Some("env-host:*"), Some("cli-host:*"));
/// assert_eq!(hosts, Some(vec!["env-host:*".to_string()]));
///
/// let hosts = resolve_allow_list(Some(" , "), Some("cli-host:*"));
/// assert_eq!(hosts, Some(vec!["cli-host:*".to_string()]));
/// ```
#[must_use]
pub fn resolve_allow_list(env_value: Option<&str>, cli_value: Option<&str>) -> Option<Vec<String>> {
    parse_comma_separated(&[env_value]).or_else(|| parse_comma_separated(&[cli_value]))
}
