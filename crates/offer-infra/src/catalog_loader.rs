//! Options catalog loader (JSON)
//!
//! The catalog file maps option codes to descriptions and categories:
//!
//! ```json
//! {
//!   "G05": { "category": "base", "description": "X5 xDrive40i" },
//!   "3AB": { "category": "optional", "text": "Sitzheizung" }
//! }
//! ```
//!
//! `text` and `label` are accepted as aliases for `description`. Entries
//! with a category outside base/standard/optional/security are skipped.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use offer_domain::model::{OptionCategory, OptionInfo};
use offer_domain::repository::MemoryCatalog;
use offer_types::{Error, Result};

#[derive(Debug, Deserialize)]
struct RawEntry {
    category: String,
    #[serde(alias = "text", alias = "label")]
    description: Option<String>,
}

/// Load a catalog file, returning an empty catalog when the path is absent
pub fn load_catalog_file(path: &Path) -> Result<MemoryCatalog> {
    if !path.exists() {
        return Ok(MemoryCatalog::empty());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::CatalogLoad(format!("failed to read {}: {}", path.display(), e)))?;
    parse_catalog_str(&content)
}

/// Parse catalog JSON content
pub fn parse_catalog_str(content: &str) -> Result<MemoryCatalog> {
    let raw: HashMap<String, RawEntry> = serde_json::from_str(content)
        .map_err(|e| Error::CatalogLoad(format!("invalid catalog JSON: {}", e)))?;

    let entries = raw
        .into_iter()
        .filter_map(|(code, entry)| {
            let category = parse_category(&entry.category)?;
            let description = entry.description.unwrap_or_else(|| code.clone());
            Some((
                code,
                OptionInfo {
                    description,
                    category,
                },
            ))
        })
        .collect();

    Ok(MemoryCatalog::new(entries))
}

fn parse_category(raw: &str) -> Option<OptionCategory> {
    match raw.to_lowercase().as_str() {
        "base" => Some(OptionCategory::Base),
        "standard" => Some(OptionCategory::Standard),
        "optional" => Some(OptionCategory::Optional),
        "security" => Some(OptionCategory::Security),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offer_domain::repository::OptionCatalog;

    #[test]
    fn parses_catalog_entries() {
        let json = r#"{
            "G05": { "category": "base", "description": "X5 xDrive40i" },
            "3AB": { "category": "optional", "text": "Sitzheizung" }
        }"#;
        let catalog = parse_catalog_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.describe("G05").unwrap().description, "X5 xDrive40i");
        assert_eq!(
            catalog.describe("3AB").unwrap().category,
            OptionCategory::Optional
        );
    }

    #[test]
    fn missing_description_falls_back_to_code() {
        let json = r#"{ "3AB": { "category": "optional" } }"#;
        let catalog = parse_catalog_str(json).unwrap();
        assert_eq!(catalog.describe("3AB").unwrap().description, "3AB");
    }

    #[test]
    fn unknown_category_entries_are_skipped() {
        let json = r#"{
            "3AB": { "category": "optional", "description": "Sitzheizung" },
            "9XX": { "category": "exotic", "description": "?" }
        }"#;
        let catalog = parse_catalog_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.describe("9XX").is_none());
    }

    #[test]
    fn absent_file_yields_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog_file(&dir.path().join("nope.json")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_catalog_str("{ not json").is_err());
    }
}
