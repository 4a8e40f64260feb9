//! Domain resolution, forward and reverse.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{IpResolver, Resolver};
use crate::reverse::reverse_zone_network;
use crate::table::BootstrapTables;
use crate::{Error, ResourceType, Result, ServiceUrls};

/// Longest presentation-format name, without the trailing dot.
const MAX_NAME_LEN: usize = 253;

/// One DNS label: letters, digits, `_` and inner hyphens, 1 to 63 chars.
static LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{N}_](?:[\p{L}\p{N}_-]{0,61}[\p{L}\p{N}_])?$")
        .expect("label pattern is valid")
});

/// Strip one trailing dot, lower-case, and check every label.
pub fn normalize_domain(identifier: &str) -> Result<String> {
    let invalid = || Error::InvalidDomain(identifier.to_string());

    let name = identifier.strip_suffix('.').unwrap_or(identifier).to_lowercase();
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(invalid());
    }
    if !name.split('.').all(|label| LABEL_RE.is_match(label)) {
        return Err(invalid());
    }

    Ok(name)
}

/// DomainResolver maps forward names by suffix and reverse-zone names by
/// the network they encode.
pub struct DomainResolver;

impl Resolver for DomainResolver {
    fn resolve<'t>(
        &self,
        tables: &'t BootstrapTables,
        identifier: &str,
    ) -> Result<Option<&'t ServiceUrls>> {
        let name = normalize_domain(identifier)?;

        if let Some(net) = reverse_zone_network(&name)? {
            return Ok(IpResolver::resolve_net(tables, net));
        }

        Ok(tables.domain.lookup(&name))
    }

    fn resource_type(&self) -> ResourceType {
        ResourceType::Domain
    }
}
