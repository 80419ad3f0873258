//! Order document loader (TOML)
//!
//! An order file captures a complete form state:
//!
//! ```toml
//! [order]
//! production-date = "2026-03-01"
//! department = "MH"
//! country = "Germany"
//! number-type = "VIN"
//! number = "WBA71234"
//! net-mode = "NET VEHICLE PRICE"
//! total-mode = "TOTAL OFFER PRICE"
//! codes = "G05 1AB 3AB 7VR"
//! notes = """
//! 3AB Sitzheizung 100
//! """
//! ```
//!
//! Every key is optional; missing selections default to the first entry of
//! the corresponding selection list and a missing date to the given
//! default (the CLI passes today).

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use offer_domain::model::{OrderForm, SelectionLists};
use offer_types::{Error, Result};

#[derive(Debug, Deserialize)]
struct OrderDocument {
    order: RawOrder,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawOrder {
    production_date: Option<String>,
    department: Option<String>,
    country: Option<String>,
    number_type: Option<String>,
    number: Option<String>,
    net_mode: Option<String>,
    total_mode: Option<String>,
    codes: Option<String>,
    notes: Option<String>,
}

/// Load an order file into a form state
pub fn load_order_file(
    path: &Path,
    lists: &SelectionLists,
    default_date: NaiveDate,
) -> Result<OrderForm> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::OrderFile(format!("failed to read {}: {}", path.display(), e)))?;
    parse_order_str(&content, lists, default_date)
}

/// Parse order TOML content into a form state
pub fn parse_order_str(
    content: &str,
    lists: &SelectionLists,
    default_date: NaiveDate,
) -> Result<OrderForm> {
    let document: OrderDocument = toml::from_str(content)
        .map_err(|e| Error::OrderFile(format!("invalid order TOML: {}", e)))?;
    let raw = document.order;

    let mut form = OrderForm::new(lists, default_date);

    if let Some(date) = raw.production_date {
        form.production_date = parse_date(&date)?;
    }
    if let Some(department) = raw.department {
        form.department = department;
    }
    if let Some(country) = raw.country {
        form.country = country;
    }
    if let Some(number_type) = raw.number_type {
        form.number_type = number_type;
    }
    if let Some(number) = raw.number {
        form.set_number_value(&number);
    }
    if let Some(net_mode) = raw.net_mode {
        form.net_mode = net_mode;
    }
    if let Some(total_mode) = raw.total_mode {
        form.total_mode = total_mode;
    }
    if let Some(codes) = raw.codes {
        form.bulk_codes = codes;
    }
    if let Some(notes) = raw.notes {
        form.notes = notes;
    }

    Ok(form)
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(format!("{} (expected YYYY-MM-DD)", value)))
}
