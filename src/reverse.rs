//! Reverse DNS zone to network conversion.
//!
//! `in-addr.arpa` names carry up to four decimal octets and `ip6.arpa` names
//! up to 32 hex nibbles, least significant first. Fewer labels denote a
//! shorter prefix: `0.7.in-addr.arpa` is `7.0.0.0/16`, `2.ip6.arpa` is
//! `2000::/4`.

use ipnet::{IpNet, Ipv4Net, Ipv6Net};
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::{Error, Result};

const IN_ADDR_ARPA: &str = "in-addr.arpa";
const IP6_ARPA: &str = "ip6.arpa";

/// Address family of a reverse zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReverseZone {
    /// `in-addr.arpa`
    V4,
    /// `ip6.arpa`
    V6,
}

impl ReverseZone {
    /// Classify a normalised (lower-case, no trailing dot) name.
    ///
    /// Returns the zone and the labels in front of it, which may be empty.
    pub fn split(name: &str) -> Option<(Self, &str)> {
        [(ReverseZone::V4, IN_ADDR_ARPA), (ReverseZone::V6, IP6_ARPA)]
            .into_iter()
            .find_map(|(zone, apex)| {
                if name == apex {
                    return Some((zone, ""));
                }
                let head = name.strip_suffix(apex)?.strip_suffix('.')?;
                Some((zone, head))
            })
    }

    /// Labels per address: octets for IPv4, nibbles for IPv6.
    fn max_labels(self) -> usize {
        match self {
            ReverseZone::V4 => 4,
            ReverseZone::V6 => 32,
        }
    }

    /// Bits encoded by one label.
    fn bits_per_label(self) -> u8 {
        match self {
            ReverseZone::V4 => 8,
            ReverseZone::V6 => 4,
        }
    }

    fn parse_label(self, label: &str) -> Option<u8> {
        match self {
            ReverseZone::V4 => {
                if label.is_empty() || label.len() > 3 || !label.bytes().all(|b| b.is_ascii_digit())
                {
                    return None;
                }
                label.parse::<u8>().ok()
            }
            ReverseZone::V6 => {
                let mut chars = label.chars();
                let nibble = chars.next()?.to_digit(16)?;
                if chars.next().is_some() {
                    return None;
                }
                u8::try_from(nibble).ok()
            }
        }
    }
}

/// Whether a normalised name lies in `in-addr.arpa` or `ip6.arpa`.
pub fn is_reverse_zone(name: &str) -> bool {
    ReverseZone::split(name).is_some()
}

/// Convert a normalised reverse-zone name to the network it delegates.
///
/// Returns `Ok(None)` for forward names. Names inside a reverse zone with
/// no labels, too many labels, or labels that are not octets/nibbles are
/// rejected rather than guessed at.
pub fn reverse_zone_network(name: &str) -> Result<Option<IpNet>> {
    let Some((zone, head)) = ReverseZone::split(name) else {
        return Ok(None);
    };
    let invalid = || Error::InvalidDomain(name.to_string());

    if head.is_empty() {
        return Err(invalid());
    }

    let labels: Vec<&str> = head.split('.').collect();
    if labels.len() > zone.max_labels() {
        return Err(invalid());
    }

    // Most significant label is last in the name.
    let mut value: u128 = 0;
    for label in labels.iter().rev() {
        let part = zone.parse_label(label).ok_or_else(invalid)?;
        value = (value << zone.bits_per_label()) | u128::from(part);
    }

    let count = u8::try_from(labels.len()).map_err(|_| invalid())?;
    let prefix_len = count * zone.bits_per_label();

    let net = match zone {
        ReverseZone::V4 => {
            let bits = u32::try_from(value).map_err(|_| invalid())?;
            let addr = bits.checked_shl(u32::from(32 - prefix_len)).unwrap_or(0);
            Ipv4Net::new(Ipv4Addr::from(addr), prefix_len)
                .map(IpNet::V4)
                .map_err(|_| invalid())?
        }
        ReverseZone::V6 => {
            let addr = value.checked_shl(u32::from(128 - prefix_len)).unwrap_or(0);
            Ipv6Net::new(Ipv6Addr::from(addr), prefix_len)
                .map(IpNet::V6)
                .map_err(|_| invalid())?
        }
    };

    Ok(Some(net))
}
