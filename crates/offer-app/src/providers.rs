//! Provider adapters: open catalog and price book from the data directory
//!
//! The data files are optional; absent files produce empty providers so a
//! fresh installation works with every price resolving to 0.

use tracing::info;

use offer_domain::repository::{MemoryCatalog, MemoryPriceBook, OptionCatalog};
use offer_infra::{load_catalog_file, load_price_book_csv, load_price_book_json};
use offer_types::Result;

use crate::config::Config;

/// File names looked up inside the data directory
pub const CATALOG_FILE: &str = "catalog.json";
pub const PRICE_BOOK_JSON: &str = "price_book.json";
pub const PRICE_BOOK_CSV: &str = "prices.csv";

/// Open the options catalog configured for this installation
pub fn open_catalog(config: &Config) -> Result<MemoryCatalog> {
    let path = config.data_dir()?.join(CATALOG_FILE);
    let catalog = load_catalog_file(&path)?;
    info!(path = %path.display(), entries = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Open the price book configured for this installation.
///
/// A JSON price book wins over the CSV price list when both exist.
pub fn open_price_book(config: &Config) -> Result<MemoryPriceBook> {
    let dir = config.data_dir()?;
    let json = dir.join(PRICE_BOOK_JSON);
    let book = if json.exists() {
        load_price_book_json(&json)?
    } else {
        load_price_book_csv(&dir.join(PRICE_BOOK_CSV))?
    };
    info!(codes = book.len(), "price book loaded");
    Ok(book)
}
