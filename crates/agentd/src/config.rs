// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `config.json` loading (§6, §10.3).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "TestFarmApi")]
    test_farm_api: RawTestFarmApi,
    #[serde(rename = "Grid")]
    grid: RawGrid,
    #[serde(rename = "Logging")]
    logging: RawLogging,
}

#[derive(Debug, Deserialize)]
struct RawTestFarmApi {
    #[serde(rename = "BaseUrl")]
    base_url: String,
    #[serde(rename = "Timeout")]
    timeout: u64,
}

#[derive(Debug, Deserialize)]
struct RawGrid {
    name: String,
    #[serde(default)]
    capabilities: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawLogging {
    #[serde(rename = "LogDir")]
    log_dir: PathBuf,
}

/// Parsed `config.json` (§6).
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout_secs: u64,
    pub grid_name: String,
    pub capabilities: Vec<String>,
    pub log_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: PathBuf, #[source] source: std::io::Error },
    #[error("failed to parse config file {path}: {source}")]
    Parse { path: PathBuf, #[source] source: serde_json::Error },
}

impl Config {
    /// Loads and validates `config.json` from `path` (§6 Configuration file).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let raw: RawConfig =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

        Ok(Self {
            base_url: raw.test_farm_api.base_url,
            timeout_secs: raw.test_farm_api.timeout,
            grid_name: raw.grid.name,
            capabilities: raw.grid.capabilities,
            log_dir: raw.logging.log_dir,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
