//! Primitive value parsers for environment and CLI strings.
//!
//! These never fail: malformed or absent input degrades to "unset" so the
//! caller can fall back to the next source or a built-in default.

/// Strings accepted as boolean `true` (compared case-insensitively).
const TRUTHY: [&str; 5] = ["true", "1", "yes", "y", "on"];

/// Strings accepted as boolean `false` (compared case-insensitively).
const FALSY: [&str; 5] = ["false", "0", "no", "n", "off"];

/// Result of parsing a boolean-valued setting.
///
/// `Unset` covers every case where the source does not express an opinion:
/// the value is absent, empty, whitespace-only, or unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoolSetting {
    /// A recognized truthy value.
    True,
    /// A recognized falsy value.
    False,
    /// No usable value.
    #[default]
    Unset,
}

impl BoolSetting {
    /// Returns the boolean if the setting was recognized.
    #[must_use]
    pub const fn value(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Unset => None,
        }
    }

    /// Returns true if the source expressed no opinion.
    #[must_use]
    pub const fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<bool> for BoolSetting {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

/// Parses a boolean environment value.
///
/// Surrounding whitespace is ignored and matching is case-insensitive.
#[must_use]
pub fn parse_bool_env(raw: Option<&str>) -> BoolSetting {
    let Some(raw) = raw else {
        return BoolSetting::Unset;
    };

    let normalized = raw.trim().to_ascii_lowercase();
    if TRUTHY.contains(&normalized.as_str()) {
        BoolSetting::True
    } else if FALSY.contains(&normalized.as_str()) {
        BoolSetting::False
    } else {
        BoolSetting::Unset
    }
}

/// Parses a comma-separated list from the first present candidate.
///
/// Candidates are checked in order and the first `Some` is selected. Later
/// candidates are only a fallback for absence: a present-but-empty candidate
/// (`""`, `",,"`, `" , "`) still wins the selection and yields `None`.
///
/// Tokens are trimmed and empty tokens are dropped; order is preserved.
///
/// # Example
///
/// ```
/// use postgres_mcp::config::parse_comma_separated;
///
/// let hosts = parse_comma_separated(&[None, Some("localhost:*, 127.0.0.1:*")]);
/// assert_eq!(hosts, Some(vec!["localhost:*".to_string(), "127.0.0.1:*".to_string()]));
///
/// assert_eq!(parse_comma_separated(&[Some(""), Some("ignored")]), None);
/// ```
#[must_use]
pub fn parse_comma_separated(candidates: &[Option<&str>]) -> Option<Vec<String>> {
    let selected = candidates.iter().find_map(|candidate| *candidate)?;

    let tokens: Vec<String> = selected
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect();

    if tokens.is_empty() { None } else { Some(tokens) }
}
