//! Provider trait definitions for catalog and pricing data
//!
//! The form logic never owns lookup tables; it is handed read-only
//! capabilities so real datasets can be supplied without code changes.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::{OptionInfo, PriceRule};
use crate::service::pricing::price_for_date;

/// Read-only option description/category lookup
pub trait OptionCatalog {
    /// Look up catalog info for a code, None when the code is unknown
    fn describe(&self, code: &str) -> Option<&OptionInfo>;

    /// Number of known codes
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only price resolution capability
pub trait PriceSource {
    /// Resolve the price of a code at a production date.
    ///
    /// Unknown codes resolve to 0, never an error.
    fn price_for(&self, code: &str, date: NaiveDate) -> f64;
}

/// In-memory catalog, keyed by option code
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    entries: HashMap<String, OptionInfo>,
}

impl MemoryCatalog {
    pub fn new(entries: HashMap<String, OptionInfo>) -> Self {
        Self { entries }
    }

    /// Empty catalog: every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }
}

impl OptionCatalog for MemoryCatalog {
    fn describe(&self, code: &str) -> Option<&OptionInfo> {
        self.entries.get(code)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// In-memory price book: per-code ordered rule lists
#[derive(Debug, Clone, Default)]
pub struct MemoryPriceBook {
    rules: HashMap<String, Vec<PriceRule>>,
}

impl MemoryPriceBook {
    pub fn new(rules: HashMap<String, Vec<PriceRule>>) -> Self {
        Self { rules }
    }

    /// Empty price book: every price resolves to 0
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl PriceSource for MemoryPriceBook {
    fn price_for(&self, code: &str, date: NaiveDate) -> f64 {
        match self.rules.get(code) {
            Some(rules) => price_for_date(rules, date),
            None => 0.0,
        }
    }
}
