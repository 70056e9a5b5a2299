//! Configuration loading
//!
//! Settings come from an optional `redocx.toml`, looked up in the working
//! directory and then in the user configuration directory. Every field has
//! a default, so running without any configuration file works out of the
//! box.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::rephrase::DecodingConfig;

pub const CONFIG_FILE_NAME: &str = "redocx.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned for input .docx files.
    pub input_dir: PathBuf,
    /// Directory receiving rephrased documents.
    pub output_dir: PathBuf,
    pub backend: BackendConfig,
    pub decoding: DecodingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            backend: BackendConfig::default(),
            decoding: DecodingConfig::default(),
        }
    }
}

/// Connection settings for the generation backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub endpoint: String,
    pub model: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// Pause after each generation call.
    pub pace_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".to_string(),
            model: "llama3.2".to_string(),
            timeout_secs: 120,
            pace_ms: 1000,
        }
    }
}

impl Config {
    /// Load configuration, preferring an explicitly given file, then
    /// `./redocx.toml`, then the user configuration directory. Defaults
    /// apply when no file exists.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("redocx").join(CONFIG_FILE_NAME));
        }

        for candidate in candidates {
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }

        Ok(Config::default())
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
