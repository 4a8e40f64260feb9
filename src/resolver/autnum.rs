//! Autnum resolution.

use super::Resolver;
use crate::table::BootstrapTables;
use crate::{Error, ResourceType, Result, ServiceUrls};

/// AutnumResolver finds the ASN range containing a decimal AS number.
pub struct AutnumResolver;

impl AutnumResolver {
    /// Parse a plain decimal AS number.
    pub fn parse(identifier: &str) -> Result<u32> {
        if identifier.is_empty() || !identifier.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAutnum(identifier.to_string()));
        }
        identifier
            .parse::<u32>()
            .map_err(|_| Error::InvalidAutnum(identifier.to_string()))
    }
}

impl Resolver for AutnumResolver {
    fn resolve<'t>(
        &self,
        tables: &'t BootstrapTables,
        identifier: &str,
    ) -> Result<Option<&'t ServiceUrls>> {
        let asn = Self::parse(identifier)?;
        Ok(tables.asn.lookup(asn))
    }

    fn resource_type(&self) -> ResourceType {
        ResourceType::Autnum
    }
}
