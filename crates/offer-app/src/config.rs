//! Configuration management for offer-pilot
//!
//! Config stored at: ~/.config/offer-pilot/config.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use offer_types::{ConfigError, ExportFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the generation backend
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Sales person shown on generated documents
    #[serde(default = "default_sales_person")]
    pub sales_person: String,

    /// Directory exported documents are written to (default: current dir)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Directory holding catalog/price book data files
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Default export format
    #[serde(default)]
    pub default_format: ExportFormat,

    /// Request timeout for the generation backend, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_sales_person() -> String {
    "Max Mustermann".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            sales_person: default_sales_person(),
            output_dir: None,
            data_dir: None,
            default_format: ExportFormat::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("offer-pilot");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Resolve the data directory for catalog and price book files
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("offer-pilot");
        Ok(data_dir)
    }

    /// Resolve the output directory for exported documents
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.backend_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.default_format, ExportFormat::Excel);
        assert_eq!(config.output_dir(), PathBuf::from("."));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "backend_url": "http://backend:9000" }"#).unwrap();
        assert_eq!(config.backend_url, "http://backend:9000");
        assert_eq!(config.sales_person, "Max Mustermann");
        assert_eq!(config.timeout_secs, 30);
    }
}
