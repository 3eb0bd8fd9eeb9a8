//! # CLI Configuration
//!
//! Optional YAML file supplying defaults for the global flags:
//!
//! ```yaml
//! catalog: data/catalog.yaml
//! output: json
//! ```
//!
//! A relative `catalog` path is taken relative to the configuration file.
//! Flags given on the command line always win over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use rig_catalog::Catalog;

/// Catalog path used when neither the flag nor the config names one.
pub const DEFAULT_CATALOG: &str = "catalog.yaml";

/// How command results are printed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Contents of a `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
}

impl CliConfig {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: CliConfig = serde_yaml::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        if let (Some(catalog), Some(dir)) = (&config.catalog, path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(dir.join(catalog));
            }
        }
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

/// Effective settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog: PathBuf,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(
        config: Option<&CliConfig>,
        catalog: Option<PathBuf>,
        format: Option<OutputFormat>,
    ) -> Self {
        let catalog = catalog
            .or_else(|| config.and_then(|c| c.catalog.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));
        let format = format
            .or_else(|| config.and_then(|c| c.output))
            .unwrap_or_default();
        Self { catalog, format }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        Catalog::load(&self.catalog)
            .with_context(|| format!("failed to load catalog {}", self.catalog.display()))
    }
}

/// Serialize `value` as pretty JSON for output.
pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}
