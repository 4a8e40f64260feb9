//! IANA bootstrap file loader.
//!
//! Reads the five RFC 9224 registry files from a local directory:
//! `asn.json`, `ipv4.json`, `ipv6.json`, `dns.json` and `object-tags.json`.
//! Each `services` entry is an array of string arrays whose last element is
//! the URL list and whose second-to-last element is the key list.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::table::{AsnTable, BootstrapTables, DomainTable, EntityTable, Ipv4Table, Ipv6Table};
use crate::ServiceUrls;

/// Bootstrap registry kinds and their file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BootstrapKind {
    Asn,
    Ipv4,
    Ipv6,
    Dns,
    ObjectTags,
}

impl BootstrapKind {
    pub const ALL: [BootstrapKind; 5] = [
        BootstrapKind::Asn,
        BootstrapKind::Ipv4,
        BootstrapKind::Ipv6,
        BootstrapKind::Dns,
        BootstrapKind::ObjectTags,
    ];

    /// File name as published by IANA.
    pub fn file_name(&self) -> &'static str {
        match self {
            BootstrapKind::Asn => "asn.json",
            BootstrapKind::Ipv4 => "ipv4.json",
            BootstrapKind::Ipv6 => "ipv6.json",
            BootstrapKind::Dns => "dns.json",
            BootstrapKind::ObjectTags => "object-tags.json",
        }
    }
}

/// A parsed bootstrap registry file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BootstrapFile {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub publication: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    pub services: Vec<Vec<Vec<String>>>,
}

impl BootstrapFile {
    /// Parse a bootstrap file from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Iterate `(keys, urls)` pairs, skipping services without URLs.
    fn entries(&self, file: &str) -> Result<Vec<(&[String], ServiceUrls)>> {
        let mut entries = Vec::with_capacity(self.services.len());

        for (idx, service) in self.services.iter().enumerate() {
            let [.., keys, urls] = service.as_slice() else {
                return Err(Error::InvalidBootstrap {
                    file: file.to_string(),
                    reason: format!("service #{} has fewer than two elements", idx),
                });
            };

            if urls.is_empty() {
                log::warn!("{}: service #{} has no URLs, skipping", file, idx);
                continue;
            }

            let urls: ServiceUrls = urls.iter().map(|u| u.trim()).collect();
            entries.push((keys.as_slice(), urls));
        }

        Ok(entries)
    }

    /// Build the ASN range table.
    pub fn asn_table(&self) -> Result<AsnTable> {
        let file = BootstrapKind::Asn.file_name();
        let mut table = AsnTable::new();
        for (keys, urls) in self.entries(file)? {
            for key in keys {
                table
                    .insert_str(key, urls.clone())
                    .map_err(|e| invalid(file, e))?;
            }
        }
        Ok(table)
    }

    /// Build the IPv4 prefix table.
    pub fn ipv4_table(&self) -> Result<Ipv4Table> {
        let file = BootstrapKind::Ipv4.file_name();
        let mut table = Ipv4Table::new();
        for (keys, urls) in self.entries(file)? {
            for key in keys {
                table
                    .insert_str(key, urls.clone())
                    .map_err(|e| invalid(file, e))?;
            }
        }
        Ok(table)
    }

    /// Build the IPv6 prefix table.
    pub fn ipv6_table(&self) -> Result<Ipv6Table> {
        let file = BootstrapKind::Ipv6.file_name();
        let mut table = Ipv6Table::new();
        for (keys, urls) in self.entries(file)? {
            for key in keys {
                table
                    .insert_str(key, urls.clone())
                    .map_err(|e| invalid(file, e))?;
            }
        }
        Ok(table)
    }

    /// Build the domain suffix table.
    pub fn domain_table(&self) -> Result<DomainTable> {
        let file = BootstrapKind::Dns.file_name();
        let mut table = DomainTable::new();
        for (keys, urls) in self.entries(file)? {
            for key in keys {
                if !table.insert(key, urls.clone()) {
                    log::warn!("{}: ignoring empty domain suffix", file);
                }
            }
        }
        Ok(table)
    }

    /// Build the entity tag table.
    pub fn entity_table(&self) -> Result<EntityTable> {
        let file = BootstrapKind::ObjectTags.file_name();
        let mut table = EntityTable::new();
        for (keys, urls) in self.entries(file)? {
            for key in keys {
                if !table.insert(key, urls.clone()) {
                    log::warn!("{}: ignoring empty object tag", file);
                }
            }
        }
        Ok(table)
    }
}

fn invalid(file: &str, err: impl std::fmt::Display) -> Error {
    Error::InvalidBootstrap {
        file: file.to_string(),
        reason: err.to_string(),
    }
}

/// Read one bootstrap file from `dir`.
///
/// Returns `None` if the file doesn't exist.
pub fn read_file(dir: &Path, kind: BootstrapKind) -> Result<Option<BootstrapFile>> {
    let path = dir.join(kind.file_name());
    if !path.exists() {
        log::warn!("Bootstrap file {:?} not found, table will be empty", path);
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let file = BootstrapFile::from_json(&content)?;
    log::debug!(
        "Read {:?}: {} services (publication {})",
        path,
        file.services.len(),
        file.publication.as_deref().unwrap_or("unknown")
    );
    Ok(Some(file))
}

/// Load all five tables from a bootstrap data directory.
pub fn load_dir(dir: &Path) -> Result<BootstrapTables> {
    if !dir.is_dir() {
        return Err(Error::Config(format!(
            "bootstrap data directory {:?} does not exist",
            dir
        )));
    }

    let mut tables = BootstrapTables::new();
    for kind in BootstrapKind::ALL {
        let Some(file) = read_file(dir, kind)? else {
            continue;
        };
        match kind {
            BootstrapKind::Asn => tables.asn = file.asn_table()?,
            BootstrapKind::Ipv4 => tables.ipv4 = file.ipv4_table()?,
            BootstrapKind::Ipv6 => tables.ipv6 = file.ipv6_table()?,
            BootstrapKind::Dns => tables.domain = file.domain_table()?,
            BootstrapKind::ObjectTags => tables.entity = file.entity_table()?,
        }
    }

    log::info!("Loaded bootstrap tables from {:?}: {}", dir, tables.stats());
    Ok(tables)
}
