// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Configuration defaults, optionally overridden from a TOML file.
//!
//! ```toml
//! [search]
//! isoform_min_size = 2
//! energy_min_cluster = 3
//! linear_min_cluster = 5
//! max_coeff = 2
//! parallel = true
//!
//! [output]
//! max_clusters = 10
//! format = "text"
//! ```
//!
//! Missing keys take their default values.

use crate::constants::{
    DEFAULT_ENERGY_MIN_CLUSTER, DEFAULT_ISOFORM_MIN_SIZE, DEFAULT_LINEAR_MIN_CLUSTER,
    DEFAULT_MAX_CLUSTERS, DEFAULT_MAX_COEFF,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "residue-telescope.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub isoform_min_size: usize,
    pub energy_min_cluster: usize,
    pub linear_min_cluster: usize,
    pub max_coeff: i64,
    pub parallel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub max_clusters: usize,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            isoform_min_size: DEFAULT_ISOFORM_MIN_SIZE,
            energy_min_cluster: DEFAULT_ENERGY_MIN_CLUSTER,
            linear_min_cluster: DEFAULT_LINEAR_MIN_CLUSTER,
            max_coeff: DEFAULT_MAX_COEFF,
            parallel: true,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            max_clusters: DEFAULT_MAX_CLUSTERS,
            format: OutputFormat::Text,
        }
    }
}

/// Load configuration from `path`, else from [`DEFAULT_CONFIG_FILE`] if it
/// exists, else the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(p) = path {
        let content = std::fs::read_to_string(p)?;
        return Ok(toml::from_str(&content)?);
    }
    match std::fs::read_to_string(DEFAULT_CONFIG_FILE) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(_) => Ok(Config::default()),
    }
}

impl Config {
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
