//! IPv4/IPv6 longest-prefix-match tables.

use ahash::AHashMap;
use ipnet::{Ipv4Net, Ipv6Net};
use std::fmt;
use std::hash::Hash;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::PrefixTableError;
use crate::ServiceUrls;

/// Network type a [`PrefixTable`] can be keyed by.
pub trait PrefixNet: Copy + Eq + Hash + fmt::Display + FromStr {
    type Addr: Copy;

    /// Host route length: 32 for IPv4, 128 for IPv6.
    const MAX_PREFIX_LEN: u8;

    fn addr(&self) -> Self::Addr;

    fn prefix_len(&self) -> u8;

    /// Network of `len` bits containing `addr`, host bits cleared.
    fn truncated(addr: Self::Addr, len: u8) -> Option<Self>;
}

impl PrefixNet for Ipv4Net {
    type Addr = Ipv4Addr;

    const MAX_PREFIX_LEN: u8 = 32;

    fn addr(&self) -> Ipv4Addr {
        Ipv4Net::addr(self)
    }

    fn prefix_len(&self) -> u8 {
        Ipv4Net::prefix_len(self)
    }

    fn truncated(addr: Ipv4Addr, len: u8) -> Option<Self> {
        Ipv4Net::new(addr, len).ok().map(|net| net.trunc())
    }
}

impl PrefixNet for Ipv6Net {
    type Addr = Ipv6Addr;

    const MAX_PREFIX_LEN: u8 = 128;

    fn addr(&self) -> Ipv6Addr {
        Ipv6Net::addr(self)
    }

    fn prefix_len(&self) -> u8 {
        Ipv6Net::prefix_len(self)
    }

    fn truncated(addr: Ipv6Addr, len: u8) -> Option<Self> {
        Ipv6Net::new(addr, len).ok().map(|net| net.trunc())
    }
}

/// PrefixTable stores networks bucketed by prefix length.
///
/// Entries of equal length never overlap, so the longest covering entry is
/// found by probing each populated length from most to least specific.
///
/// # Examples
/// ```
/// use ipnet::Ipv4Net;
/// use rdap_bootstrap::table::Ipv4Table;
///
/// let mut table = Ipv4Table::new();
/// table.insert_str("191.0.0.0/8", ["https://rdap.lacnic.net/rdap"].into_iter().collect()).unwrap();
/// let query: Ipv4Net = "191.0.1.0/24".parse().unwrap();
/// assert!(table.lookup(query).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct PrefixTable<N: PrefixNet> {
    /// One bucket per prefix length, index = length
    buckets: Vec<AHashMap<N, ServiceUrls>>,
    /// Populated lengths, most specific first
    lengths: Vec<u8>,
}

/// IPv4 prefix table.
pub type Ipv4Table = PrefixTable<Ipv4Net>;

/// IPv6 prefix table.
pub type Ipv6Table = PrefixTable<Ipv6Net>;

impl<N: PrefixNet> Default for PrefixTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: PrefixNet> PrefixTable<N> {
    pub fn new() -> Self {
        Self {
            buckets: (0..=N::MAX_PREFIX_LEN).map(|_| AHashMap::new()).collect(),
            lengths: Vec::new(),
        }
    }

    /// Total number of networks.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Insert a network. Host bits are cleared before storing.
    pub fn insert(&mut self, net: N, urls: ServiceUrls) -> Result<(), PrefixTableError> {
        let len = net.prefix_len();
        let net = N::truncated(net.addr(), len)
            .ok_or_else(|| PrefixTableError::InvalidCidr(net.to_string()))?;

        let bucket = &mut self.buckets[usize::from(len)];
        if bucket.contains_key(&net) {
            return Err(PrefixTableError::Duplicate(net.to_string()));
        }
        bucket.insert(net, urls);

        if let Err(pos) = self.lengths.binary_search_by(|probe| len.cmp(probe)) {
            self.lengths.insert(pos, len);
        }
        Ok(())
    }

    /// Insert a network given in CIDR notation.
    pub fn insert_str(&mut self, cidr: &str, urls: ServiceUrls) -> Result<(), PrefixTableError> {
        let cidr = cidr.trim();
        let net = cidr
            .parse::<N>()
            .map_err(|_| PrefixTableError::InvalidCidr(cidr.to_string()))?;
        self.insert(net, urls)
    }

    /// Find the most specific stored network that covers `query`.
    ///
    /// A stored network covers the query when it is no longer than the query
    /// and shares its leading bits.
    pub fn lookup(&self, query: N) -> Option<&ServiceUrls> {
        let query_len = query.prefix_len();
        self.lengths
            .iter()
            .filter(|&&len| len <= query_len)
            .find_map(|&len| {
                let candidate = N::truncated(query.addr(), len)?;
                self.buckets[usize::from(len)].get(&candidate)
            })
    }

    /// Find the most specific stored network containing a single address.
    pub fn lookup_addr(&self, addr: N::Addr) -> Option<&ServiceUrls> {
        N::truncated(addr, N::MAX_PREFIX_LEN).and_then(|host| self.lookup(host))
    }
}
