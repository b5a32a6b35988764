use crate::error::{Error, Result};
use crate::lineage::DEFAULT_MAX_DEPTH;
use crate::store::RestStoreConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Upper bound on configurable depth; each generation doubles the lookups
pub const MAX_DEPTH_LIMIT: usize = 16;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub resolver: ResolverConfig,
    pub store: StoreConfig,
    pub output: OutputConfig,
}

/// Resolution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Ancestor generations to resolve beyond the root
    pub max_depth: usize,
    /// Resolve sire and dam branches concurrently
    pub parallel: bool,
}

/// Record store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// JSON file or directory of JSON files (file backend)
    pub path: PathBuf,
    /// Base URL (rest backend)
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub table: String,
    pub timeout_secs: u64,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Append record ids in the tree chart
    pub show_ids: bool,
}

/// Where records come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    File,
    Rest,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tree,
    Compact,
    Json,
    Mermaid,
}

impl OutputFormat {
    /// Parse a CLI format name
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "tree" | "chart" => Ok(OutputFormat::Tree),
            "compact" => Ok(OutputFormat::Compact),
            "json" => Ok(OutputFormat::Json),
            "mermaid" | "mmd" => Ok(OutputFormat::Mermaid),
            other => Err(Error::Other(format!("Unknown format: {}", other))),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            parallel: true,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: PathBuf::from("./geckos.json"),
            url: None,
            api_key: None,
            table: "geckos".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_ids: false,
        }
    }
}

impl StoreConfig {
    /// Connection settings for the rest backend
    pub fn rest(&self) -> Result<RestStoreConfig> {
        let url = self
            .url
            .clone()
            .ok_or_else(|| Error::config_validation("store.url is required for the rest backend"))?;

        Ok(RestStoreConfig {
            url,
            api_key: self.api_key.clone(),
            table: self.table.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                if path.exists() {
                    log::warn!("Ignoring config {}: {}", path.display(), e);
                }
                Self::default()
            }
        }
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        store_path: Option<PathBuf>,
        url: Option<String>,
        depth: Option<usize>,
        format: Option<OutputFormat>,
        sequential: bool,
    ) {
        if let Some(path) = store_path {
            self.store.path = path;
            self.store.backend = StoreBackend::File;
        }

        if let Some(url) = url {
            self.store.url = Some(url);
            self.store.backend = StoreBackend::Rest;
        }

        if let Some(d) = depth {
            self.resolver.max_depth = d;
        }

        if let Some(fmt) = format {
            self.output.format = fmt;
        }

        if sequential {
            self.resolver.parallel = false;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.resolver.max_depth == 0 {
            return Err(Error::config_validation("max_depth must be at least 1"));
        }

        if self.resolver.max_depth > MAX_DEPTH_LIMIT {
            return Err(Error::config_validation(format!(
                "max_depth cannot exceed {}",
                MAX_DEPTH_LIMIT
            )));
        }

        if self.store.backend == StoreBackend::Rest && self.store.url.is_none() {
            return Err(Error::config_validation("store.url is required for the rest backend"));
        }

        if self.store.table.trim().is_empty() {
            return Err(Error::config_validation("store.table must not be empty"));
        }

        if self.store.timeout_secs == 0 {
            return Err(Error::config_validation("store.timeout_secs must be at least 1"));
        }

        Ok(())
    }
}
