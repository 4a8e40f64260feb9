//! Process configuration.
//!
//! Values come from defaults, then an optional YAML file, then environment
//! variables. The scheme policy is resolved once here and handed to the
//! [`Redirector`](crate::Redirector) as a plain value.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::SchemePolicy;

/// Environment variable overriding the bootstrap data directory.
pub const ENV_DATA_DIR: &str = "RDAP_BOOTSTRAP_DATA_DIR";

/// Environment variable holding the match-scheme-on-redirect flag.
pub const ENV_MATCH_SCHEME: &str = "RDAP_BOOTSTRAP_MATCH_SCHEME_ON_REDIRECT";

/// Default bootstrap data directory.
pub const DEFAULT_DATA_DIR: &str = "bootstrap";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the IANA bootstrap JSON files
    pub data_dir: PathBuf,
    /// Scheme selection policy for redirects
    pub scheme_policy: SchemePolicy,
}

/// On-disk YAML layout; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    match_scheme_on_redirect: Option<serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            scheme_policy: SchemePolicy::Unset,
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Load a YAML file, then apply the process environment on top.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config = Self::from_yaml(&content)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse YAML text over the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        let mut config = Self::default();

        if let Some(dir) = file.data_dir {
            config.data_dir = dir;
        }
        if let Some(flag) = file.match_scheme_on_redirect {
            config.scheme_policy = policy_from_yaml(&flag);
        }

        Ok(config)
    }

    /// Override values from an environment lookup.
    pub fn apply_env<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = get(ENV_DATA_DIR).filter(|d| !d.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(flag) = get(ENV_MATCH_SCHEME) {
            self.scheme_policy = SchemePolicy::from_str_lossy(&flag);
        }
    }
}

fn policy_from_yaml(value: &serde_yaml::Value) -> SchemePolicy {
    match value {
        serde_yaml::Value::Bool(flag) => SchemePolicy::from_flag(Some(*flag)),
        serde_yaml::Value::String(s) => SchemePolicy::from_str_lossy(s),
        serde_yaml::Value::Null => SchemePolicy::Unset,
        other => {
            log::warn!(
                "Ignoring malformed match_scheme_on_redirect {:?}, using default",
                other
            );
            SchemePolicy::Unset
        }
    }
}
