//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::Result;

/// Name of the optional configuration file, looked up in the working
/// directory.
pub const CONFIG_FILE: &str = "hh-checks.toml";

/// Main configuration structure
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Base URL of the API under test
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory holding the JSON schema files
    #[serde(default = "default_schema_dir")]
    pub schema_dir: PathBuf,

    /// Directory the HTML report is written into
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            schema_dir: default_schema_dir(),
            report_dir: default_report_dir(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.hh.ru".to_string()
}

fn default_schema_dir() -> PathBuf {
    PathBuf::from("schemas")
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("test_logs")
}

impl Config {
    /// Load configuration from `hh-checks.toml` in the working directory
    ///
    /// Returns default configuration if the file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a specific path, defaulting when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            return toml::from_str(&content)
                .map_err(|e| super::Error::Config(e.to_string()));
        }
        Ok(Self::default())
    }
}
