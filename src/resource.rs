//! RDAP resource type definitions.

use std::fmt;

/// ResourceType names the kind of object an RDAP query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// Autonomous system number
    Autnum,
    /// IPv4 or IPv6 address or network
    Ip,
    /// Forward or reverse DNS domain
    Domain,
    /// Nameserver host name
    Nameserver,
    /// Registry entity handle (`<handle>-<TAG>`)
    Entity,
}

impl ResourceType {
    /// All resource types, in path-matching order.
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Autnum,
        ResourceType::Ip,
        ResourceType::Domain,
        ResourceType::Nameserver,
        ResourceType::Entity,
    ];

    /// Parse a resource type from its path segment (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "autnum" => Some(ResourceType::Autnum),
            "ip" => Some(ResourceType::Ip),
            "domain" => Some(ResourceType::Domain),
            "nameserver" => Some(ResourceType::Nameserver),
            "entity" => Some(ResourceType::Entity),
            _ => None,
        }
    }

    /// Get the path segment for this resource type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Autnum => "autnum",
            ResourceType::Ip => "ip",
            ResourceType::Domain => "domain",
            ResourceType::Nameserver => "nameserver",
            ResourceType::Entity => "entity",
        }
    }

    /// Get the request path prefix, e.g. `/autnum/`.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            ResourceType::Autnum => "/autnum/",
            ResourceType::Ip => "/ip/",
            ResourceType::Domain => "/domain/",
            ResourceType::Nameserver => "/nameserver/",
            ResourceType::Entity => "/entity/",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
