//! Per-resource-type resolvers.
//!
//! Each resolver turns a raw identifier into a lookup key and queries its
//! bootstrap table. `Ok(None)` means the identifier was well formed but no
//! registry covers it.

mod autnum;
mod domain;
mod entity;
mod ip;
mod nameserver;

pub use autnum::AutnumResolver;
pub use domain::{normalize_domain, DomainResolver};
pub use entity::EntityResolver;
pub use ip::{parse_ip_query, IpResolver};
pub use nameserver::NameserverResolver;

use crate::table::BootstrapTables;
use crate::{ResourceType, Result, ServiceUrls};

/// Resolver trait defines the interface for all resource resolvers.
pub trait Resolver: Send + Sync {
    /// Resolve `identifier` against `tables`.
    ///
    /// # Returns
    /// The registry's URLs, `None` if no entry applies, or an error if the
    /// identifier is malformed.
    fn resolve<'t>(
        &self,
        tables: &'t BootstrapTables,
        identifier: &str,
    ) -> Result<Option<&'t ServiceUrls>>;

    /// Get the resource type this resolver handles.
    fn resource_type(&self) -> ResourceType;
}

/// Get the resolver for a resource type.
pub fn resolver_for(resource_type: ResourceType) -> &'static dyn Resolver {
    match resource_type {
        ResourceType::Autnum => &AutnumResolver,
        ResourceType::Ip => &IpResolver,
        ResourceType::Domain => &DomainResolver,
        ResourceType::Nameserver => &NameserverResolver,
        ResourceType::Entity => &EntityResolver,
    }
}

/// Resolve an identifier of the given type.
pub fn resolve<'t>(
    tables: &'t BootstrapTables,
    resource_type: ResourceType,
    identifier: &str,
) -> Result<Option<&'t ServiceUrls>> {
    let result = resolver_for(resource_type).resolve(tables, identifier);
    match &result {
        Ok(Some(urls)) => log::debug!("{} {:?} -> {}", resource_type, identifier, urls),
        Ok(None) => log::debug!("{} {:?} -> no match", resource_type, identifier),
        Err(e) => log::debug!("{} {:?} rejected: {}", resource_type, identifier, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_for_covers_all_types() {
        for resource_type in ResourceType::ALL {
            assert_eq!(resolver_for(resource_type).resource_type(), resource_type);
        }
    }

    #[test]
    fn test_resolver_trait_object() {
        let resolver: &dyn Resolver = &EntityResolver;
        let tables = BootstrapTables::new();
        assert!(resolver.resolve(&tables, "ABC123-ARIN").unwrap().is_none());
    }
}
