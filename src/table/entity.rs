//! Entity object-tag table.

use ahash::AHashMap;

use crate::ServiceUrls;

/// EntityTable maps upper-cased object tags (`ARIN`, `AP`, ...) to registries.
#[derive(Debug, Clone, Default)]
pub struct EntityTable {
    tags: AHashMap<String, ServiceUrls>,
}

impl EntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Register a tag; returns `false` for an empty tag.
    pub fn insert(&mut self, tag: &str, urls: ServiceUrls) -> bool {
        let tag = tag.trim().to_uppercase();
        if tag.is_empty() {
            return false;
        }
        self.tags.insert(tag, urls);
        true
    }

    /// Exact lookup of an already upper-cased tag.
    pub fn lookup(&self, tag: &str) -> Option<&ServiceUrls> {
        self.tags.get(tag)
    }
}
