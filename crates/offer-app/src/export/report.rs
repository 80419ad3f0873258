//! Plain-text protocol report

use offer_domain::model::{OrderForm, Quote};

/// Render the capture protocol for an order form and its derived quote
pub fn render_report(form: &OrderForm, quote: &Quote, sales_person: &str) -> String {
    let mut content = String::new();

    content.push_str("BMW ANGEBOTSPROTOKOLL - DATENAUFNAHME\n");
    content.push_str("==========================================\n");
    content.push_str(&format!(
        "PROD-DATUM: {} | DEPT: {}\n",
        form.production_date.format("%Y-%m-%d"),
        form.department
    ));
    let number = if form.number_value.is_empty() {
        "N/A"
    } else {
        &form.number_value
    };
    content.push_str(&format!(
        "{}: {} | LAND: {}\n",
        form.number_type, number, form.country
    ));
    content.push_str(&format!(
        "PREIS-MODUS: {} / {}\n",
        form.net_mode, form.total_mode
    ));
    content.push_str(&format!("VERKÄUFER: {}\n\n", sales_person));

    content.push_str("EINGEGEBENE OPTIONEN:\n");
    if quote.items.is_empty() {
        content.push_str("Keine Optionen eingegeben.\n");
    } else {
        for item in &quote.items {
            content.push_str(&format!(
                "[{}] {:<35} | {}\n",
                item.code,
                item.description,
                format_eur(item.price)
            ));
        }
    }

    content.push_str("\n------------------------------------------\n");
    content.push_str(&format!("GESAMTSUMME: {}\n\n", format_eur(quote.total)));

    let notes = if form.notes.is_empty() {
        "Keine"
    } else {
        &form.notes
    };
    content.push_str(&format!("ZUSÄTZLICHE ANMERKUNGEN (XXXL):\n{}\n", notes));

    content
}

/// German-style currency rendering: `1.234,56 €`
pub fn format_eur(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{},{:02} €", sign, grouped, fraction)
}
