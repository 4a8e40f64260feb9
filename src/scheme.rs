//! Request schemes, the scheme-match policy and redirect URL selection.

use std::fmt;

use crate::{Error, ServiceUrls};

/// Scheme of the inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestScheme {
    Http,
    Https,
}

impl RequestScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestScheme::Http => "http",
            RequestScheme::Https => "https",
        }
    }
}

impl fmt::Display for RequestScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RequestScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(RequestScheme::Http),
            "https" => Ok(RequestScheme::Https),
            _ => Err(Error::UnknownScheme(s.to_string())),
        }
    }
}

/// Tri-state "match scheme on redirect" policy.
///
/// Only matters when a registry publishes both an HTTP and an HTTPS URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemePolicy {
    /// Flag not configured; behaves like [`SchemePolicy::PreferHttps`].
    #[default]
    Unset,
    /// Flag `true`: redirect to the URL whose scheme equals the request's.
    MatchRequest,
    /// Flag `false`: always redirect to HTTPS.
    PreferHttps,
}

impl SchemePolicy {
    /// Build a policy from an optional boolean flag.
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => SchemePolicy::Unset,
            Some(true) => SchemePolicy::MatchRequest,
            Some(false) => SchemePolicy::PreferHttps,
        }
    }

    /// Parse a textual flag value.
    ///
    /// Anything other than `true`/`false` falls back to `Unset` with a warning,
    /// so a bad configuration value never fails a request.
    pub fn from_str_lossy(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "true" => SchemePolicy::MatchRequest,
            "false" => SchemePolicy::PreferHttps,
            _ => {
                log::warn!(
                    "Ignoring malformed match-scheme flag {:?}, using default",
                    value
                );
                SchemePolicy::Unset
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemePolicy::Unset => "unset",
            SchemePolicy::MatchRequest => "match-request",
            SchemePolicy::PreferHttps => "prefer-https",
        }
    }
}

impl fmt::Display for SchemePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pick the base URL to redirect to.
///
/// A registry with a single scheme is always redirected to that scheme.
/// With both available, only [`SchemePolicy::MatchRequest`] honours the
/// request scheme; otherwise HTTPS wins.
pub fn select_base_url(
    urls: &ServiceUrls,
    scheme: RequestScheme,
    policy: SchemePolicy,
) -> Option<&str> {
    match (urls.http_url(), urls.https_url()) {
        (Some(http), None) => Some(http),
        (None, Some(https)) => Some(https),
        (Some(http), Some(https)) => match (policy, scheme) {
            (SchemePolicy::MatchRequest, RequestScheme::Http) => Some(http),
            (SchemePolicy::MatchRequest, RequestScheme::Https) => Some(https),
            (SchemePolicy::Unset | SchemePolicy::PreferHttps, _) => Some(https),
        },
        (None, None) => None,
    }
}

/// Join a base URL with the request path suffix.
pub fn join_url(base: &str, suffix: &str) -> String {
    if suffix.starts_with('/') {
        format!("{}{}", base.trim_end_matches('/'), suffix)
    } else {
        format!("{}{}", base, suffix)
    }
}

/// Select a base URL and append the request path suffix.
pub fn redirect_url(
    urls: &ServiceUrls,
    scheme: RequestScheme,
    policy: SchemePolicy,
    suffix: &str,
) -> Option<String> {
    select_base_url(urls, scheme, policy).map(|base| join_url(base, suffix))
}
