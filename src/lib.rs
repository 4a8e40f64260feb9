//! rdap-bootstrap - RDAP bootstrap resolution engine.
//!
//! Given an RDAP request path naming an autonomous system number, an IP
//! address or network, a domain, a nameserver or an entity handle, this
//! crate finds the registry responsible for it and builds the redirect URL.
//!
//! # Features
//!
//! - **Autnum**: binary search over sorted, non-overlapping ASN ranges
//! - **IP**: IPv4 and IPv6 longest-prefix match, addresses or CIDRs
//! - **Domain**: longest-suffix match; `in-addr.arpa` and `ip6.arpa` names
//!   are converted to networks and matched against the IP tables
//! - **Nameserver**: forward names only
//! - **Entity**: object tag after the last hyphen of the handle
//! - **Scheme selection**: HTTP vs HTTPS under a tri-state policy
//! - **Hot reload**: whole table generations are swapped atomically
//!
//! # Quick Start
//!
//! ```no_run
//! use rdap_bootstrap::{Config, Redirector, RequestScheme};
//!
//! let config = Config::from_env();
//! let redirector = Redirector::from_dir(&config.data_dir, config.scheme_policy)?;
//!
//! match redirector.redirect_path("/autnum/10", RequestScheme::Https)? {
//!     Some(url) => println!("302 {}", url),
//!     None => println!("404"),
//! }
//! # Ok::<(), rdap_bootstrap::Error>(())
//! ```
//!
//! # Scheme Policy
//!
//! When a registry publishes both an HTTP and an HTTPS URL:
//! 1. `MatchRequest` redirects to the request's own scheme
//! 2. `PreferHttps` and `Unset` always redirect to HTTPS
//!
//! A registry with a single scheme is always redirected to it.

mod error;
mod path;
mod resource;
mod service_urls;

pub mod config;
pub mod loader;
pub mod redirect;
pub mod resolver;
pub mod reverse;
pub mod scheme;
pub mod table;

// Re-export core types
pub use error::{AsnTableError, Error, PrefixTableError, Result};
pub use path::RequestPath;
pub use resource::ResourceType;
pub use service_urls::ServiceUrls;

// Re-export configuration and scheme selection
pub use config::Config;
pub use scheme::{select_base_url, RequestScheme, SchemePolicy};

// Re-export tables and the orchestrator
pub use redirect::Redirector;
pub use table::{BootstrapTables, TableStats};
