//! Error types for rdap-bootstrap.

use thiserror::Error;

/// Error type for rdap-bootstrap operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Request path could not be decoded
    #[error("malformed request path: {0}")]
    MalformedPath(String),

    /// Request path does not name a known RDAP resource type
    #[error("unknown resource type in path: {0}")]
    UnknownResourceType(String),

    /// Autnum identifier is not an unsigned 32-bit number
    #[error("invalid autnum: {0}")]
    InvalidAutnum(String),

    /// IP identifier is not an address or CIDR
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    /// Domain or nameserver identifier is not a valid name
    #[error("invalid domain name: {0}")]
    InvalidDomain(String),

    /// Entity identifier is empty
    #[error("invalid entity handle: {0:?}")]
    InvalidEntity(String),

    /// Request scheme is neither http nor https
    #[error("unknown request scheme: {0}")]
    UnknownScheme(String),

    /// Bootstrap file content is structurally valid JSON but unusable
    #[error("invalid bootstrap data in {file}: {reason}")]
    InvalidBootstrap { file: String, reason: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Whether the error was caused by the request rather than by local state.
    ///
    /// Client errors map to a "bad request" style response; everything else
    /// is a server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedPath(_)
                | Error::UnknownResourceType(_)
                | Error::InvalidAutnum(_)
                | Error::InvalidAddress(_)
                | Error::InvalidDomain(_)
                | Error::InvalidEntity(_)
                | Error::UnknownScheme(_)
        )
    }
}

/// Result type alias for rdap-bootstrap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ASN table construction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AsnTableError {
    /// Range start is greater than its end
    #[error("inverted ASN range: {start}-{end}")]
    Inverted { start: u32, end: u32 },

    /// Range intersects one already in the table
    #[error("ASN range {start}-{end} overlaps an existing range")]
    Overlap { start: u32, end: u32 },

    /// Range key could not be parsed
    #[error("invalid ASN range: {0}")]
    InvalidRange(String),
}

/// Error type for IPv4/IPv6 prefix table construction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PrefixTableError {
    /// Invalid CIDR notation
    #[error("invalid CIDR notation: {0}")]
    InvalidCidr(String),

    /// Same network and prefix length registered twice
    #[error("duplicate prefix: {0}")]
    Duplicate(String),
}
