//! Date-ranged price resolution

use chrono::NaiveDate;

use crate::model::PriceRule;

/// Resolve the price valid at `date` from an ordered rule list.
///
/// The first rule whose inclusive [start, end] interval contains the date
/// wins. When no interval matches, the first rule's price is used; an empty
/// rule list resolves to 0.
pub fn price_for_date(rules: &[PriceRule], date: NaiveDate) -> f64 {
    rules
        .iter()
        .find(|r| r.contains(date))
        .or_else(|| rules.first())
        .map(|r| r.price)
        .unwrap_or(0.0)
}
