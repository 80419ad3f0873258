//! Derived quote calculation for the order form

use chrono::NaiveDate;

use crate::model::{Quote, QuoteItem};
use crate::repository::{OptionCatalog, PriceSource};

/// Description used for codes the catalog does not know
pub const FALLBACK_DESCRIPTION: &str = "Zusatzausstattung";

/// Derive the itemized quote from the bulk-code text.
///
/// Pure function of its inputs: splits the text on whitespace, resolves a
/// description and a date-dependent price per token, and sums the prices.
/// Unknown codes get the fallback description and a zero price; malformed
/// input cannot occur, an empty text simply yields an empty quote.
pub fn calculate_quote(
    production_date: NaiveDate,
    bulk_codes: &str,
    catalog: &dyn OptionCatalog,
    prices: &dyn PriceSource,
) -> Quote {
    let items: Vec<QuoteItem> = bulk_codes
        .split_whitespace()
        .map(|code| {
            let description = catalog
                .describe(code)
                .map(|info| info.description.clone())
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());
            QuoteItem {
                code: code.to_string(),
                description,
                price: prices.price_for(code, production_date),
            }
        })
        .collect();

    let total = items.iter().map(|i| i.price).sum();
    Quote { items, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OptionCategory, OptionInfo, PriceRule};
    use crate::repository::{MemoryCatalog, MemoryPriceBook};
    use std::collections::HashMap;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn empty_text_yields_empty_quote() {
        let quote = calculate_quote(
            date(),
            "",
            &MemoryCatalog::empty(),
            &MemoryPriceBook::empty(),
        );
        assert!(quote.items.is_empty());
        assert_eq!(quote.total, 0.0);

        let quote = calculate_quote(
            date(),
            "   \n\t ",
            &MemoryCatalog::empty(),
            &MemoryPriceBook::empty(),
        );
        assert!(quote.items.is_empty());
        assert_eq!(quote.total, 0.0);
    }

    #[test]
    fn empty_price_book_totals_zero_for_any_tokens() {
        let quote = calculate_quote(
            date(),
            "1AB 2TC 3AD weird-token 123",
            &MemoryCatalog::empty(),
            &MemoryPriceBook::empty(),
        );
        assert_eq!(quote.items.len(), 5);
        assert_eq!(quote.total, 0.0);
        assert!(quote
            .items
            .iter()
            .all(|i| i.description == FALLBACK_DESCRIPTION && i.price == 0.0));
    }

    #[test]
    fn known_codes_get_description_and_price() {
        let mut entries = HashMap::new();
        entries.insert(
            "1AB".to_string(),
            OptionInfo {
                description: "Sitzheizung".to_string(),
                category: OptionCategory::Optional,
            },
        );
        let catalog = MemoryCatalog::new(entries);

        let mut rules = HashMap::new();
        rules.insert(
            "1AB".to_string(),
            vec![PriceRule {
                start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
                price: 250.0,
            }],
        );
        let prices = MemoryPriceBook::new(rules);

        let quote = calculate_quote(date(), "1AB 9ZZ", &catalog, &prices);
        assert_eq!(quote.items[0].description, "Sitzheizung");
        assert_eq!(quote.items[0].price, 250.0);
        assert_eq!(quote.items[1].description, FALLBACK_DESCRIPTION);
        assert_eq!(quote.items[1].price, 0.0);
        assert_eq!(quote.total, 250.0);
    }
}
