//! Domain suffix table.

use ahash::AHashMap;

use crate::ServiceUrls;

/// DomainTable maps registered DNS suffixes (usually TLDs) to registries.
///
/// Suffixes are stored lower-case without leading or trailing dots.
/// Lookup walks from the full name towards the root, so the first hit is
/// the most specific registered suffix.
///
/// # Examples
/// ```
/// use rdap_bootstrap::table::DomainTable;
///
/// let mut table = DomainTable::new();
/// table.insert("INFO", ["https://rdap.afilias.net/rdap/info"].into_iter().collect());
/// assert!(table.lookup("ns1.example.info").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DomainTable {
    suffixes: AHashMap<String, ServiceUrls>,
}

impl DomainTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Register a suffix. A later registration of the same suffix replaces
    /// the earlier one; returns `false` for an empty suffix.
    pub fn insert(&mut self, suffix: &str, urls: ServiceUrls) -> bool {
        let suffix = suffix.trim().trim_matches('.').to_lowercase();
        if suffix.is_empty() {
            return false;
        }
        self.suffixes.insert(suffix, urls);
        true
    }

    /// Find the longest registered suffix of `name`.
    ///
    /// `name` must already be normalised: lower-case, no trailing dot.
    pub fn lookup(&self, name: &str) -> Option<&ServiceUrls> {
        if let Some(urls) = self.suffixes.get(name) {
            return Some(urls);
        }

        let mut current = name;
        while let Some(pos) = current.find('.') {
            current = &current[pos + 1..];
            if let Some(urls) = self.suffixes.get(current) {
                return Some(urls);
            }
        }

        None
    }
}
