//! Entity handle resolution.

use super::Resolver;
use crate::table::BootstrapTables;
use crate::{Error, ResourceType, Result, ServiceUrls};

/// EntityResolver matches the object tag after the last hyphen of a handle.
pub struct EntityResolver;

impl EntityResolver {
    /// Upper-cased tag of `<handle>-<tag>`, if the handle has a hyphen.
    pub fn tag(identifier: &str) -> Option<String> {
        identifier
            .rsplit_once('-')
            .map(|(_, tag)| tag.to_uppercase())
    }
}

impl Resolver for EntityResolver {
    fn resolve<'t>(
        &self,
        tables: &'t BootstrapTables,
        identifier: &str,
    ) -> Result<Option<&'t ServiceUrls>> {
        if identifier.is_empty() {
            return Err(Error::InvalidEntity(identifier.to_string()));
        }

        Ok(Self::tag(identifier).and_then(|tag| tables.entity.lookup(&tag)))
    }

    fn resource_type(&self) -> ResourceType {
        ResourceType::Entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> BootstrapTables {
        let mut tables = BootstrapTables::new();
        tables.entity.insert("ARIN", ["http://arin.example"].into_iter().collect());
        tables.entity.insert("AP", ["https://apnic.example"].into_iter().collect());
        tables
    }

    #[test]
    fn test_tag_extraction() {
        assert_eq!(EntityResolver::tag("ABC123-ARIN").as_deref(), Some("ARIN"));
        assert_eq!(EntityResolver::tag("A-B-c-ap").as_deref(), Some("AP"));
        assert_eq!(EntityResolver::tag("ABC123-").as_deref(), Some(""));
        assert_eq!(EntityResolver::tag("ABC123"), None);
    }

    #[test]
    fn test_tag_case_insensitive() {
        let tables = tables();
        let resolver = EntityResolver;
        let upper = resolver.resolve(&tables, "ABC123-ARIN").unwrap();
        let lower = resolver.resolve(&tables, "ABC123-arin").unwrap();
        assert!(upper.is_some());
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_no_match_cases() {
        let tables = tables();
        let resolver = EntityResolver;
        assert!(resolver.resolve(&tables, "ABC123").unwrap().is_none());
        assert!(resolver.resolve(&tables, "ABC123-").unwrap().is_none());
        assert!(resolver.resolve(&tables, "ABC123-RIPE").unwrap().is_none());
        assert!(matches!(
            resolver.resolve(&tables, ""),
            Err(Error::InvalidEntity(_))
        ));
    }
}
