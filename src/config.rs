use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::data::extract::ExtractOptions;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV: &str = "STUDY_SCORE_CONFIG";

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

/// User-tunable settings. Every field is optional in the JSON file:
///
/// ```json
/// { "header_rows": 1, "delimiter": ";", "data_file": "scores.csv" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Leading rows skipped as headers.
    pub header_rows: usize,
    /// Field separator for delimited text files.
    pub delimiter: char,
    /// Dataset opened at start-up.
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_rows: ExtractOptions::default().header_rows,
            delimiter: ',',
            data_file: None,
        }
    }
}

impl Config {
    /// Read a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text).context("parsing config JSON")?;
        config.delimiter_byte()?;
        Ok(config)
    }

    /// Load from [`CONFIG_ENV`] if set, otherwise defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                log::info!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            header_rows: self.header_rows,
        }
    }

    /// The delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            bail!("Delimiter {:?} must be a single ASCII character", self.delimiter);
        }
        Ok(self.delimiter as u8)
    }
}
