//! Error types for offer-pilot

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Generation backend returned HTTP {status}")]
    Backend { status: u16 },

    #[error("Invalid priced line format: {0}")]
    InvalidPricedLine(String),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Order file error: {0}")]
    OrderFile(String),

    #[error("Catalog data error: {0}")]
    CatalogLoad(String),

    #[error("Price book data error: {0}")]
    PriceBookLoad(String),
}

pub type Result<T> = std::result::Result<T, Error>;
