//! Priced line detection and parsing
//!
//! A priced line has the shape `CODE Description... PRICE`, e.g.
//! `3AB Sitzheizung 100` or `3AD M-Lenkrad 3000,50`. The code is exactly
//! three uppercase alphanumeric characters and the price a trailing decimal
//! number with `.` or `,` as separator.

use std::collections::HashMap;

use offer_types::{Error, Result};

/// Parse a single priced line into (code, price).
///
/// Returns None when the line does not have the priced-line shape.
pub fn parse_priced_line(line: &str) -> Option<(String, f64)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return None;
    }

    let code = tokens[0];
    if !is_option_code(code) {
        return None;
    }

    let price = parse_price(tokens[tokens.len() - 1])?;
    Some((code.to_string(), price))
}

/// Collect the lines of a text buffer that look like priced lines.
///
/// Heuristic scan used when assembling the generation payload; it never
/// errors, non-matching lines are simply skipped.
pub fn scan_priced_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| parse_priced_line(line).is_some())
        .map(str::to_string)
        .collect()
}

/// Strictly parse a list of priced lines into a code -> price map.
///
/// A malformed line is an error here, matching the generation backend's
/// contract. Later lines win on duplicate codes.
pub fn parse_priced_lines(lines: &[String]) -> Result<HashMap<String, f64>> {
    let mut prices = HashMap::new();
    for line in lines {
        let trimmed = line.trim();
        let (code, price) = parse_priced_line(trimmed)
            .ok_or_else(|| Error::InvalidPricedLine(trimmed.to_string()))?;
        prices.insert(code, price);
    }
    Ok(prices)
}

fn is_option_code(token: &str) -> bool {
    token.len() == 3
        && token
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Parse a trailing price token: digits with an optional single `.` or `,`
/// decimal separator.
fn parse_price(token: &str) -> Option<f64> {
    let mut separators = 0;
    for c in token.chars() {
        match c {
            '0'..='9' => {}
            '.' | ',' => separators += 1,
            _ => return None,
        }
    }
    if separators > 1 || token.is_empty() {
        return None;
    }
    if !token.starts_with(|c: char| c.is_ascii_digit())
        || !token.ends_with(|c: char| c.is_ascii_digit())
    {
        return None;
    }
    token.replace(',', ".").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_priced_line() {
        assert_eq!(
            parse_priced_line("3AB Sitzheizung 100"),
            Some(("3AB".to_string(), 100.0))
        );
        assert_eq!(
            parse_priced_line("3AD M-Lenkrad 3000"),
            Some(("3AD".to_string(), 3000.0))
        );
    }

    #[test]
    fn accepts_comma_and_dot_decimals() {
        assert_eq!(
            parse_priced_line("3AB Sitzheizung 100,50"),
            Some(("3AB".to_string(), 100.5))
        );
        assert_eq!(
            parse_priced_line("3AB Sitzheizung 100.50"),
            Some(("3AB".to_string(), 100.5))
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_priced_line(""), None);
        assert_eq!(parse_priced_line("3AB 100"), None); // no description
        assert_eq!(parse_priced_line("3ab Sitzheizung 100"), None); // lowercase code
        assert_eq!(parse_priced_line("3ABC Sitzheizung 100"), None); // 4-char code
        assert_eq!(parse_priced_line("3AB Sitzheizung abc"), None); // no price
        assert_eq!(parse_priced_line("3AB Sitzheizung 1,0,0"), None); // two separators
        assert_eq!(parse_priced_line("3AB Sitzheizung 100,"), None); // dangling separator
    }

    #[test]
    fn scan_skips_non_matching_lines() {
        let notes = "3AB Sitzheizung 100\nsome free text\n\n3AD M-Lenkrad 3000\nWeight 2100 kg notes";
        let lines = scan_priced_lines(notes);
        assert_eq!(lines, vec!["3AB Sitzheizung 100", "3AD M-Lenkrad 3000"]);
    }

    #[test]
    fn strict_parse_errors_on_malformed_line() {
        let lines = vec!["3AB Sitzheizung 100".to_string(), "not a line".to_string()];
        let err = parse_priced_lines(&lines).unwrap_err();
        assert!(matches!(err, Error::InvalidPricedLine(_)));
    }

    #[test]
    fn strict_parse_builds_price_map() {
        let lines = vec![
            "3AB Sitzheizung 100".to_string(),
            "3AD M-Lenkrad 3000,50".to_string(),
        ];
        let prices = parse_priced_lines(&lines).unwrap();
        assert_eq!(prices["3AB"], 100.0);
        assert_eq!(prices["3AD"], 3000.5);
    }
}
