//! Option catalog and pricing rule types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Equipment bucket an option code belongs to on the quotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionCategory {
    Base,
    Standard,
    Optional,
    Security,
}

impl OptionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            OptionCategory::Base => "Basic Vehicle",
            OptionCategory::Standard => "Standard Equipment",
            OptionCategory::Optional => "Optional Equipment",
            OptionCategory::Security => "Security Equipment",
        }
    }
}

/// Catalog entry for a single option code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionInfo {
    pub description: String,
    pub category: OptionCategory,
}

/// One date-ranged price rule for an option code.
///
/// Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRule {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub price: f64,
}

impl PriceRule {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// A single line of the derived quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteItem {
    pub code: String,
    pub description: String,
    pub price: f64,
}

/// Derived calculation result: one item per bulk token plus the price sum
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quote {
    pub items: Vec<QuoteItem>,
    pub total: f64,
}

/// A code/description/price row of the normalized vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleItem {
    pub code: String,
    pub text: String,
    pub price: f64,
}

/// Option codes bucketed by catalog category, with prices attached
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizedVehicle {
    pub base: Vec<VehicleItem>,
    pub standard: Vec<VehicleItem>,
    pub optional: Vec<VehicleItem>,
    pub security: Vec<VehicleItem>,
    pub total_price: f64,
}

impl NormalizedVehicle {
    pub fn subtotal(items: &[VehicleItem]) -> f64 {
        items.iter().map(|i| i.price).sum()
    }
}
