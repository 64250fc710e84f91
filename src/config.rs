use serde::Deserialize;
use std::fs;

use crate::error::{Result, ScrapeError};

/// Run configuration: the list of result page URLs to scrape.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub sources: Vec<String>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ScrapeError::Config(format!("Failed to read config file '{}': {}", path, e))
        })?;

        let config: Config = toml::from_str(&content)?;
        if config.sources.is_empty() {
            return Err(ScrapeError::Config(format!(
                "No sources listed in '{}'",
                path
            )));
        }
        Ok(config)
    }
}
