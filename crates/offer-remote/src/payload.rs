//! Generation request payload

use serde::{Deserialize, Serialize};

use offer_domain::model::OrderForm;
use offer_domain::service::scan_priced_lines;
use offer_types::{Error, ExportFormat, Result};

/// JSON body of `POST {backend_url}/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub date: String,
    pub model: String,
    pub color: String,
    pub interior: String,
    pub priced_lines: Vec<String>,
    pub all_codes: Vec<String>,
    pub format: String,
}

impl GenerateRequest {
    /// Assemble the payload from a form state.
    ///
    /// Model, color and interior are taken positionally from the first
    /// three bulk tokens (empty when absent); priced lines are the notes
    /// lines that match the `CODE ... PRICE` shape.
    pub fn from_form(form: &OrderForm, format: ExportFormat) -> Result<Self> {
        let wire_format = format
            .wire_name()
            .ok_or_else(|| Error::UnsupportedFormat(format.to_string()))?;

        let all_codes = form.bulk_tokens();
        let token_at = |i: usize| all_codes.get(i).cloned().unwrap_or_default();

        Ok(Self {
            date: form.production_date.format("%Y-%m-%d").to_string(),
            model: token_at(0),
            color: token_at(1),
            interior: token_at(2),
            priced_lines: scan_priced_lines(&form.notes),
            all_codes,
            format: wire_format.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use offer_domain::model::SelectionLists;

    fn form() -> OrderForm {
        let lists = SelectionLists::default();
        let mut form = OrderForm::new(&lists, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        form.bulk_codes = "G05 A96 MAH1 1AB 3AB".to_string();
        form.notes = "3AB Sitzheizung 100\nfreeform remark".to_string();
        form
    }

    #[test]
    fn infers_model_color_interior_positionally() {
        let req = GenerateRequest::from_form(&form(), ExportFormat::Excel).unwrap();
        assert_eq!(req.model, "G05");
        assert_eq!(req.color, "A96");
        assert_eq!(req.interior, "MAH1");
        assert_eq!(req.all_codes.len(), 5);
        assert_eq!(req.priced_lines, vec!["3AB Sitzheizung 100"]);
        assert_eq!(req.format, "excel");
        assert_eq!(req.date, "2026-03-01");
    }

    #[test]
    fn short_token_lists_leave_fields_empty() {
        let lists = SelectionLists::default();
        let mut f = OrderForm::new(&lists, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        f.bulk_codes = "G05".to_string();
        let req = GenerateRequest::from_form(&f, ExportFormat::Pdf).unwrap();
        assert_eq!(req.model, "G05");
        assert_eq!(req.color, "");
        assert_eq!(req.interior, "");
        assert_eq!(req.format, "pdf");
    }

    #[test]
    fn report_is_not_a_wire_format() {
        let err = GenerateRequest::from_form(&form(), ExportFormat::Report).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }
}
