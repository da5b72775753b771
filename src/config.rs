//! Configuration for the cqlhelp CLI.
//!
//! Settings live in `config.toml` under the user's config directory
//! (`~/.config/cqlhelp/config.toml` on Linux):
//!
//! ```toml
//! [docs]
//! base_url = "https://cassandra.apache.org/doc/latest/cassandra/cql/"
//! ```
//!
//! `CQLSH_DOCS_URL` overrides `docs.base_url` when set.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::topics::Anchor;

/// Documentation root used when nothing is configured.
pub const DEFAULT_DOCS_URL: &str = "https://cassandra.apache.org/doc/latest/cassandra/cql/";

/// Environment variable overriding the documentation root.
pub const DOCS_URL_ENV: &str = "CQLSH_DOCS_URL";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub docs: DocsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Base URL that anchors are appended to
    pub base_url: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DOCS_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration, then apply environment overrides.
    ///
    /// With an explicit `path` the file must exist. Otherwise the default
    /// location is tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                Self::from_file(path)?
            }
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("no config file found, using defaults");
                    Self::default()
                }
            },
        };

        if let Ok(url) = std::env::var(DOCS_URL_ENV) {
            if !url.trim().is_empty() {
                debug!(base_url = %url, "docs base url overridden from {DOCS_URL_ENV}");
                config.docs.base_url = url;
            }
        }

        Ok(config)
    }

    /// Parse a config file without applying environment overrides.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), base_url = %config.docs.base_url, "loaded config");
        Ok(config)
    }

    /// Full documentation URL for an anchor.
    pub fn doc_url(&self, anchor: &Anchor) -> String {
        let base = self.docs.base_url.trim_end_matches('/');
        format!("{base}/{anchor}")
    }
}

/// `<config dir>/cqlhelp/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cqlhelp").join(CONFIG_FILE))
}
