//! Autonomous system number range table.

use crate::error::AsnTableError;
use crate::ServiceUrls;

/// A closed ASN interval `[start, end]` and the registry serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsnRange {
    pub start: u32,
    pub end: u32,
    pub urls: ServiceUrls,
}

impl AsnRange {
    pub fn contains(&self, asn: u32) -> bool {
        self.start <= asn && asn <= self.end
    }
}

/// AsnTable maps ASN ranges to registries.
///
/// Ranges are kept sorted by start and never overlap, so a lookup is a
/// single binary search.
///
/// # Examples
/// ```
/// use rdap_bootstrap::table::AsnTable;
///
/// let mut table = AsnTable::new();
/// table
///     .insert(1, 1876, ["https://rdap.arin.net/registry"].into_iter().collect())
///     .unwrap();
/// assert!(table.lookup(10).is_some());
/// assert!(table.lookup(1877).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AsnTable {
    ranges: Vec<AsnRange>,
}

impl AsnTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Ranges in ascending order.
    pub fn ranges(&self) -> &[AsnRange] {
        &self.ranges
    }

    /// Insert a range, keeping the table sorted.
    pub fn insert(&mut self, start: u32, end: u32, urls: ServiceUrls) -> Result<(), AsnTableError> {
        if start > end {
            return Err(AsnTableError::Inverted { start, end });
        }

        let pos = self.ranges.partition_point(|r| r.start < start);
        let overlaps_prev = pos > 0 && self.ranges[pos - 1].end >= start;
        let overlaps_next = self.ranges.get(pos).is_some_and(|r| r.start <= end);
        if overlaps_prev || overlaps_next {
            return Err(AsnTableError::Overlap { start, end });
        }

        self.ranges.insert(pos, AsnRange { start, end, urls });
        Ok(())
    }

    /// Insert a range written as `"N"` or `"A-B"`.
    pub fn insert_str(&mut self, key: &str, urls: ServiceUrls) -> Result<(), AsnTableError> {
        let (start, end) = parse_range(key)?;
        self.insert(start, end, urls)
    }

    /// Find the registry whose range contains `asn`.
    pub fn lookup(&self, asn: u32) -> Option<&ServiceUrls> {
        let idx = self.ranges.partition_point(|r| r.start <= asn);
        let candidate = self.ranges.get(idx.checked_sub(1)?)?;
        candidate.contains(asn).then_some(&candidate.urls)
    }
}

/// Parse an IANA ASN key: a single number or an inclusive `start-end` pair.
pub fn parse_range(key: &str) -> Result<(u32, u32), AsnTableError> {
    let key = key.trim();
    let invalid = || AsnTableError::InvalidRange(key.to_string());

    match key.split_once('-') {
        Some((start, end)) => {
            let start = start.trim().parse::<u32>().map_err(|_| invalid())?;
            let end = end.trim().parse::<u32>().map_err(|_| invalid())?;
            Ok((start, end))
        }
        None => {
            let asn = key.parse::<u32>().map_err(|_| invalid())?;
            Ok((asn, asn))
        }
    }
}
