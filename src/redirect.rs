//! Redirect orchestration with hot reload support.
//!
//! This module provides [`Redirector`], which:
//! - Dispatches a query to the resolver for its resource type
//! - Selects the HTTP or HTTPS base URL under the configured policy
//! - Atomically swaps whole table generations without blocking readers

use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::path::RequestPath;
use crate::resolver;
use crate::scheme::{redirect_url, RequestScheme, SchemePolicy};
use crate::table::{BootstrapTables, TableStats};
use crate::{loader, ResourceType, Result, ServiceUrls};

/// Redirector answers "where should this RDAP query go?".
///
/// The scheme policy is fixed at construction; the tables can be replaced
/// at any time with [`Redirector::reload`]. In-flight queries complete
/// against the generation they started with.
///
/// # Example
///
/// ```
/// use rdap_bootstrap::{BootstrapTables, Redirector, RequestScheme, SchemePolicy};
///
/// let mut tables = BootstrapTables::new();
/// tables
///     .entity
///     .insert("ARIN", ["https://rdap.arin.net/registry/"].into_iter().collect());
///
/// let redirector = Redirector::new(tables, SchemePolicy::Unset);
/// let url = redirector
///     .redirect_path("/entity/ABC123-ARIN", RequestScheme::Http)
///     .unwrap();
/// assert_eq!(
///     url.as_deref(),
///     Some("https://rdap.arin.net/registry/entity/ABC123-ARIN")
/// );
/// ```
pub struct Redirector {
    /// Current table generation, wrapped in ArcSwap for atomic replacement.
    tables: ArcSwap<BootstrapTables>,
    /// Scheme selection policy, read once from configuration.
    policy: SchemePolicy,
    /// Number of reloads since construction.
    generation: AtomicU64,
}

impl Redirector {
    /// Create a redirector over an initial table generation.
    pub fn new(tables: BootstrapTables, policy: SchemePolicy) -> Self {
        log::info!(
            "Bootstrap tables ready: {} (scheme policy: {})",
            tables.stats(),
            policy
        );
        Self {
            tables: ArcSwap::from_pointee(tables),
            policy,
            generation: AtomicU64::new(0),
        }
    }

    /// Load the initial generation from a bootstrap data directory.
    pub fn from_dir(dir: &Path, policy: SchemePolicy) -> Result<Self> {
        let tables = loader::load_dir(dir)?;
        Ok(Self::new(tables, policy))
    }

    /// The configured scheme policy.
    pub fn policy(&self) -> SchemePolicy {
        self.policy
    }

    /// Number of completed reloads.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Entry counts of the current generation.
    pub fn stats(&self) -> TableStats {
        self.tables.load().stats()
    }

    /// Snapshot of the current generation.
    pub fn tables(&self) -> Arc<BootstrapTables> {
        self.tables.load_full()
    }

    /// Hot reload: atomically replace every table at once.
    pub fn reload(&self, tables: BootstrapTables) {
        let stats = tables.stats();
        self.tables.store(Arc::new(tables));
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!("Reloaded bootstrap tables (generation {}): {}", generation, stats);
    }

    /// Hot reload from a bootstrap data directory.
    ///
    /// On error the current generation stays in place.
    pub fn reload_from_dir(&self, dir: &Path) -> Result<()> {
        let tables = loader::load_dir(dir)?;
        self.reload(tables);
        Ok(())
    }

    /// Resolve the registry URLs for an identifier.
    ///
    /// Returns `Ok(None)` when no registry covers a well-formed identifier.
    pub fn service_urls(
        &self,
        resource_type: ResourceType,
        identifier: &str,
    ) -> Result<Option<ServiceUrls>> {
        let tables = self.tables.load();
        Ok(resolver::resolve(&tables, resource_type, identifier)?.cloned())
    }

    /// Build the redirect target for a query.
    ///
    /// The selected base URL is joined with `path_suffix`, normally the
    /// request path itself. Returns `Ok(None)` when nothing matches.
    pub fn redirect(
        &self,
        resource_type: ResourceType,
        identifier: &str,
        scheme: RequestScheme,
        path_suffix: &str,
    ) -> Result<Option<String>> {
        let tables = self.tables.load();
        let url = resolver::resolve(&tables, resource_type, identifier)?
            .and_then(|urls| redirect_url(urls, scheme, self.policy, path_suffix));
        Ok(url)
    }

    /// Parse a request path and build its redirect target.
    pub fn redirect_path(&self, path: &str, scheme: RequestScheme) -> Result<Option<String>> {
        let request = RequestPath::parse(path)?;
        self.redirect(request.resource_type, &request.identifier, scheme, path)
    }
}
