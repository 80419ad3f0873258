//! Order form state and fixed selection lists

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed enumerations the form fields select from.
///
/// Carried as a value instead of module-level constants so a deployment can
/// substitute its own lists without touching form logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionLists {
    pub departments: Vec<String>,
    pub countries: Vec<String>,
    pub number_types: Vec<String>,
    pub net_modes: Vec<String>,
    pub total_modes: Vec<String>,
}

impl Default for SelectionLists {
    fn default() -> Self {
        Self {
            departments: to_strings(&["MH", "FR", "CG", "JR"]),
            countries: to_strings(&[
                "Abu Dhabi",
                "Egypt",
                "Australia",
                "Germany",
                "France",
                "Great Britain",
                "USA",
                "China",
                "Dubai",
                "Switzerland",
                "Austria",
                "Sweden",
                "Norway",
            ]),
            number_types: to_strings(&["VIN", "Order NR.", "Proforma Order NR."]),
            net_modes: to_strings(&["NET VEHICLE PRICE", "NET VEHICLE PRICE WHS"]),
            total_modes: to_strings(&[
                "TOTAL OFFER PRICE",
                "TOTAL OFFER PRICE WHS",
                "TOTAL OFFER PRICE WHS GVT.",
            ]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Captured state of the order entry form.
///
/// Every field is independently mutable; there are no cross-field
/// invariants. The only normalization applied anywhere is on the
/// identification number (uppercased, clipped to [`OrderForm::NUMBER_MAX_LEN`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderForm {
    pub production_date: NaiveDate,
    pub department: String,
    pub country: String,
    pub number_type: String,
    pub number_value: String,
    pub net_mode: String,
    pub total_mode: String,
    /// Whitespace-separated option codes, pasted in bulk
    pub bulk_codes: String,
    /// Extended free-text notes buffer
    pub notes: String,
}

impl OrderForm {
    /// Maximum length of the identification number field
    pub const NUMBER_MAX_LEN: usize = 10;

    /// New form with the first entry of each selection list preselected
    pub fn new(lists: &SelectionLists, production_date: NaiveDate) -> Self {
        Self {
            production_date,
            department: first(&lists.departments),
            country: first(&lists.countries),
            number_type: first(&lists.number_types),
            number_value: String::new(),
            net_mode: first(&lists.net_modes),
            total_mode: first(&lists.total_modes),
            bulk_codes: String::new(),
            notes: String::new(),
        }
    }

    /// Set the identification number, applying the field's normalization
    pub fn set_number_value(&mut self, value: &str) {
        self.number_value = Self::normalize_number(value);
    }

    /// Uppercase and clip an identification number
    pub fn normalize_number(value: &str) -> String {
        value
            .trim()
            .to_uppercase()
            .chars()
            .take(Self::NUMBER_MAX_LEN)
            .collect()
    }

    /// Option code tokens from the bulk field, split on whitespace
    pub fn bulk_tokens(&self) -> Vec<String> {
        self.bulk_codes
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Label used in export filenames: the identification number, or the
    /// literal "Data" when none was entered
    pub fn document_label(&self) -> &str {
        if self.number_value.is_empty() {
            "Data"
        } else {
            &self.number_value
        }
    }
}

fn first(list: &[String]) -> String {
    list.first().cloned().unwrap_or_default()
}
