//! Nameserver resolution.

use super::{normalize_domain, Resolver};
use crate::reverse::is_reverse_zone;
use crate::table::BootstrapTables;
use crate::{ResourceType, Result, ServiceUrls};

/// NameserverResolver matches host names by suffix.
///
/// Nameservers are forward names only; anything under `in-addr.arpa` or
/// `ip6.arpa` never matches.
pub struct NameserverResolver;

impl Resolver for NameserverResolver {
    fn resolve<'t>(
        &self,
        tables: &'t BootstrapTables,
        identifier: &str,
    ) -> Result<Option<&'t ServiceUrls>> {
        let name = normalize_domain(identifier)?;
        if is_reverse_zone(&name) {
            return Ok(None);
        }
        Ok(tables.domain.lookup(&name))
    }

    fn resource_type(&self) -> ResourceType {
        ResourceType::Nameserver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_zone_never_matches() {
        let mut tables = BootstrapTables::new();
        tables
            .ipv4
            .insert_str("5.0.0.0/8", ["https://ripe.example"].into_iter().collect())
            .unwrap();
        tables.domain.insert("arpa", ["https://iana.example"].into_iter().collect());

        let resolver = NameserverResolver;
        assert!(resolver.resolve(&tables, "ns1.5.in-addr.arpa.").unwrap().is_none());
        assert!(resolver.resolve(&tables, "5.in-addr.arpa").unwrap().is_none());
        assert!(resolver.resolve(&tables, "0.2.ip6.arpa").unwrap().is_none());
        assert!(resolver.resolve(&tables, "ns.example.arpa").unwrap().is_some());
    }

    #[test]
    fn test_forward_match() {
        let mut tables = BootstrapTables::new();
        tables.domain.insert("info", ["https://info.example"].into_iter().collect());

        let resolver = NameserverResolver;
        assert!(resolver.resolve(&tables, "ns1.example.INFO.").unwrap().is_some());
        assert!(resolver.resolve(&tables, "ns1..info").is_err());
    }
}
