//! Request path parsing.

use percent_encoding::percent_decode_str;

use crate::{Error, ResourceType, Result};

/// A request path split into its resource type and raw identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPath {
    pub resource_type: ResourceType,
    /// Percent-decoded remainder of the path after the type prefix.
    pub identifier: String,
}

impl RequestPath {
    /// Split a path such as `/ip/191.0.1.0/24` into `(Ip, "191.0.1.0/24")`.
    ///
    /// No semantic check is made on the identifier; an empty identifier is
    /// passed through for the resolver to reject.
    pub fn parse(path: &str) -> Result<Self> {
        for resource_type in ResourceType::ALL {
            if let Some(rest) = path.strip_prefix(resource_type.path_prefix()) {
                let identifier = percent_decode_str(rest)
                    .decode_utf8()
                    .map_err(|_| Error::MalformedPath(path.to_string()))?
                    .into_owned();
                return Ok(Self {
                    resource_type,
                    identifier,
                });
            }
        }

        Err(Error::UnknownResourceType(path.to_string()))
    }
}
