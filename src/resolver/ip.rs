//! IP address and network resolution.

use ipnet::IpNet;
use std::net::IpAddr;

use super::Resolver;
use crate::table::BootstrapTables;
use crate::{Error, ResourceType, Result, ServiceUrls};

/// IpResolver performs longest-prefix match of an address or CIDR.
pub struct IpResolver;

impl IpResolver {
    /// Longest-prefix match of a network against the table of its family.
    pub fn resolve_net(tables: &BootstrapTables, net: IpNet) -> Option<&ServiceUrls> {
        match net {
            IpNet::V4(v4) => tables.ipv4.lookup(v4),
            IpNet::V6(v6) => tables.ipv6.lookup(v6),
        }
    }
}

/// Parse an IP query: a bare address becomes a host route, a CIDR is
/// normalised to its network address.
pub fn parse_ip_query(identifier: &str) -> Result<IpNet> {
    let invalid = || Error::InvalidAddress(identifier.to_string());

    let net = if identifier.contains('/') {
        identifier.parse::<IpNet>().map_err(|_| invalid())?
    } else {
        let addr = identifier.parse::<IpAddr>().map_err(|_| invalid())?;
        let host_len = if addr.is_ipv4() { 32 } else { 128 };
        IpNet::new(addr, host_len).map_err(|_| invalid())?
    };

    Ok(net.trunc())
}

impl Resolver for IpResolver {
    fn resolve<'t>(
        &self,
        tables: &'t BootstrapTables,
        identifier: &str,
    ) -> Result<Option<&'t ServiceUrls>> {
        let net = parse_ip_query(identifier)?;
        Ok(Self::resolve_net(tables, net))
    }

    fn resource_type(&self) -> ResourceType {
        ResourceType::Ip
    }
}
