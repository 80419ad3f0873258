//! Export services
//!
//! One explicit contract over the two rendering paths: local in-process
//! rendering (Excel workbook or plain-text report) and remote generation
//! via the backend. Every artifact is written under the same filename
//! contract.

pub mod excel;
pub mod report;

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use offer_domain::model::OrderForm;
use offer_domain::repository::{OptionCatalog, PriceSource};
use offer_domain::service::{calculate_quote, normalize_vehicle_input, scan_priced_lines};
use offer_remote::{GenerateRequest, RemoteClient};
use offer_types::{Error, ExportFormat, Result};

/// Filename for an exported document:
/// `BMW_Export_<number|"Data">_<production date>.<ext>`
pub fn export_file_name(form: &OrderForm, format: ExportFormat) -> String {
    format!(
        "BMW_Export_{}_{}.{}",
        form.document_label(),
        form.production_date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Render an export locally and write it to the output directory.
///
/// Excel produces the full quotation workbook; Report the plain-text
/// protocol. PDF has no local renderer and is rejected.
pub fn export_local(
    form: &OrderForm,
    format: ExportFormat,
    catalog: &dyn OptionCatalog,
    prices: &dyn PriceSource,
    output_dir: &Path,
    sales_person: &str,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(export_file_name(form, format));

    match format {
        ExportFormat::Excel => {
            let priced_lines = scan_priced_lines(&form.notes);
            let vehicle = normalize_vehicle_input(&form.bulk_tokens(), &priced_lines, catalog)?;
            excel::write_quotation(form, &vehicle, sales_person, &path)?;
        }
        ExportFormat::Report => {
            let quote = calculate_quote(form.production_date, &form.bulk_codes, catalog, prices);
            let content = report::render_report(form, &quote, sales_person);
            std::fs::write(&path, content)?;
        }
        ExportFormat::Pdf => {
            return Err(Error::UnsupportedFormat(format!(
                "{} (no local renderer, use remote mode)",
                format
            )));
        }
    }

    info!(path = %path.display(), %format, "local export written");
    Ok(path)
}

/// Request an export from the generation backend and save the returned
/// document bytes to the output directory.
pub fn export_remote(
    form: &OrderForm,
    format: ExportFormat,
    backend_url: &str,
    timeout: Duration,
    output_dir: &Path,
) -> Result<PathBuf> {
    let request = GenerateRequest::from_form(form, format)?;
    let client = RemoteClient::new(backend_url, timeout)?;
    let bytes = client.generate(&request)?;

    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(export_file_name(form, format));
    std::fs::write(&path, bytes)?;

    info!(path = %path.display(), %format, backend = backend_url, "remote export saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use offer_domain::model::SelectionLists;
    use offer_domain::repository::{MemoryCatalog, MemoryPriceBook};

    fn form() -> OrderForm {
        let lists = SelectionLists::default();
        let mut form = OrderForm::new(&lists, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        form.bulk_codes = "1AB 2TC".to_string();
        form
    }

    #[test]
    fn file_name_uses_number_value() {
        let mut f = form();
        f.set_number_value("wba71234");
        assert_eq!(
            export_file_name(&f, ExportFormat::Excel),
            "BMW_Export_WBA71234_2026-03-01.xlsx"
        );
    }

    #[test]
    fn file_name_falls_back_to_data() {
        assert_eq!(
            export_file_name(&form(), ExportFormat::Pdf),
            "BMW_Export_Data_2026-03-01.pdf"
        );
        assert_eq!(
            export_file_name(&form(), ExportFormat::Report),
            "BMW_Export_Data_2026-03-01.txt"
        );
    }

    #[test]
    fn local_pdf_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_local(
            &form(),
            ExportFormat::Pdf,
            &MemoryCatalog::empty(),
            &MemoryPriceBook::empty(),
            dir.path(),
            "Max Mustermann",
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn local_report_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_local(
            &form(),
            ExportFormat::Report,
            &MemoryCatalog::empty(),
            &MemoryPriceBook::empty(),
            dir.path(),
            "Max Mustermann",
        )
        .unwrap();

        assert!(path.exists());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("BMW ANGEBOTSPROTOKOLL"));
        assert!(content.contains("[1AB]"));
    }

    #[test]
    fn local_excel_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_local(
            &form(),
            ExportFormat::Excel,
            &MemoryCatalog::empty(),
            &MemoryPriceBook::empty(),
            dir.path(),
            "Max Mustermann",
        )
        .unwrap();

        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
