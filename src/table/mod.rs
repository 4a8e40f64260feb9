//! Bootstrap lookup tables.
//!
//! Tables are filled once by a loader and then only read. A complete set is
//! published as one [`BootstrapTables`] value so that readers always see a
//! single consistent generation.

mod asn;
mod domain;
mod entity;
mod prefix;

pub use asn::{parse_range, AsnRange, AsnTable};
pub use domain::DomainTable;
pub use entity::EntityTable;
pub use prefix::{Ipv4Table, Ipv6Table, PrefixNet, PrefixTable};

use std::fmt;

/// The five bootstrap tables of one generation.
#[derive(Debug, Clone, Default)]
pub struct BootstrapTables {
    pub asn: AsnTable,
    pub ipv4: Ipv4Table,
    pub ipv6: Ipv6Table,
    pub domain: DomainTable,
    pub entity: EntityTable,
}

impl BootstrapTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry counts per table.
    pub fn stats(&self) -> TableStats {
        TableStats {
            asn_ranges: self.asn.len(),
            ipv4_prefixes: self.ipv4.len(),
            ipv6_prefixes: self.ipv6.len(),
            domain_suffixes: self.domain.len(),
            entity_tags: self.entity.len(),
        }
    }
}

/// Entry counts of a [`BootstrapTables`] generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableStats {
    pub asn_ranges: usize,
    pub ipv4_prefixes: usize,
    pub ipv6_prefixes: usize,
    pub domain_suffixes: usize,
    pub entity_tags: usize,
}

impl TableStats {
    pub fn total(&self) -> usize {
        self.asn_ranges
            + self.ipv4_prefixes
            + self.ipv6_prefixes
            + self.domain_suffixes
            + self.entity_tags
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ASN ranges, {} IPv4 prefixes, {} IPv6 prefixes, {} domain suffixes, {} entity tags",
            self.asn_ranges,
            self.ipv4_prefixes,
            self.ipv6_prefixes,
            self.domain_suffixes,
            self.entity_tags
        )
    }
}
