//! Price book loaders (JSON rule lists, or a flat CSV price list)
//!
//! JSON shape, per code an ordered rule list:
//!
//! ```json
//! { "3AB": [ { "start": "2025-01-01", "end": "2025-12-31", "price": 100.0 } ] }
//! ```
//!
//! CSV shape, one rule per row with a header:
//!
//! ```text
//! code,start,end,price
//! 3AB,2025-01-01,2025-12-31,100.0
//! ```

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use offer_domain::model::PriceRule;
use offer_domain::repository::MemoryPriceBook;
use offer_types::{Error, Result};

/// Load a JSON price book, returning an empty book when the path is absent
pub fn load_price_book_json(path: &Path) -> Result<MemoryPriceBook> {
    if !path.exists() {
        return Ok(MemoryPriceBook::empty());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::PriceBookLoad(format!("failed to read {}: {}", path.display(), e)))?;
    parse_price_book_str(&content)
}

/// Parse JSON price book content
pub fn parse_price_book_str(content: &str) -> Result<MemoryPriceBook> {
    let rules: HashMap<String, Vec<PriceRule>> = serde_json::from_str(content)
        .map_err(|e| Error::PriceBookLoad(format!("invalid price book JSON: {}", e)))?;
    Ok(MemoryPriceBook::new(rules))
}

#[derive(Debug, Deserialize)]
struct CsvRule {
    code: String,
    start: NaiveDate,
    end: NaiveDate,
    price: f64,
}

/// Load a CSV price list, returning an empty book when the path is absent
pub fn load_price_book_csv(path: &Path) -> Result<MemoryPriceBook> {
    if !path.exists() {
        return Ok(MemoryPriceBook::empty());
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::PriceBookLoad(format!("failed to read {}: {}", path.display(), e)))?;

    let mut rules: HashMap<String, Vec<PriceRule>> = HashMap::new();
    for record in reader.deserialize() {
        let row: CsvRule =
            record.map_err(|e| Error::PriceBookLoad(format!("invalid price row: {}", e)))?;
        rules.entry(row.code).or_default().push(PriceRule {
            start: row.start,
            end: row.end,
            price: row.price,
        });
    }

    Ok(MemoryPriceBook::new(rules))
}
