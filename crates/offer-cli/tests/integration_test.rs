//! Integration tests for the export pipeline

use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::tempdir;

use offer_app::config::Config;
use offer_app::export::{export_file_name, export_local};
use offer_app::providers::{open_catalog, open_price_book, CATALOG_FILE, PRICE_BOOK_CSV};
use offer_domain::model::SelectionLists;
use offer_domain::repository::PriceSource;
use offer_infra::load_order_file;
use offer_types::ExportFormat;

fn write_order_file(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("order.toml");
    std::fs::write(
        &path,
        r#"
[order]
production-date = "2026-05-20"
department = "FR"
country = "Germany"
number = "wba71234"
codes = "G05 1AB 3AB"
notes = """
3AB Sitzheizung 100
handover at plant
"""
"#,
    )
    .unwrap();
    path
}

fn write_data_files(dir: &std::path::Path) {
    std::fs::write(
        dir.join(CATALOG_FILE),
        r#"{
            "G05": { "category": "base", "description": "X5 xDrive40i" },
            "1AB": { "category": "standard", "description": "Klimaautomatik" },
            "3AB": { "category": "optional", "description": "Sitzheizung" }
        }"#,
    )
    .unwrap();
    std::fs::write(
        dir.join(PRICE_BOOK_CSV),
        "code,start,end,price\n3AB,2026-01-01,2026-12-31,100.0\n",
    )
    .unwrap();
}

#[test]
fn order_file_exports_to_excel() {
    let data_dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    write_data_files(data_dir.path());
    let order_path = write_order_file(data_dir.path());

    let config = Config {
        data_dir: Some(data_dir.path().to_path_buf()),
        ..Config::default()
    };

    let lists = SelectionLists::default();
    let form = load_order_file(
        &order_path,
        &lists,
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    )
    .unwrap();
    assert_eq!(form.number_value, "WBA71234");

    let catalog = open_catalog(&config).unwrap();
    let prices = open_price_book(&config).unwrap();

    let path = export_local(
        &form,
        ExportFormat::Excel,
        &catalog,
        &prices,
        out_dir.path(),
        &config.sales_person,
    )
    .unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "BMW_Export_WBA71234_2026-05-20.xlsx"
    );
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn order_file_exports_to_report_with_prices() {
    let data_dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    write_data_files(data_dir.path());
    let order_path = write_order_file(data_dir.path());

    let config = Config {
        data_dir: Some(data_dir.path().to_path_buf()),
        ..Config::default()
    };

    let lists = SelectionLists::default();
    let form = load_order_file(
        &order_path,
        &lists,
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    )
    .unwrap();

    let catalog = open_catalog(&config).unwrap();
    let prices = open_price_book(&config).unwrap();
    assert_eq!(
        prices.price_for("3AB", form.production_date),
        100.0
    );

    let path = export_local(
        &form,
        ExportFormat::Report,
        &catalog,
        &prices,
        out_dir.path(),
        &config.sales_person,
    )
    .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[3AB] Sitzheizung"));
    assert!(content.contains("GESAMTSUMME: 100,00 €"));
    assert!(content.contains("handover at plant"));
}

#[test]
fn filename_contract_holds_without_number() {
    let lists = SelectionLists::default();
    let form = offer_domain::model::OrderForm::new(
        &lists,
        NaiveDate::from_ymd_opt(2026, 5, 20).unwrap(),
    );
    assert_eq!(
        export_file_name(&form, ExportFormat::Pdf),
        "BMW_Export_Data_2026-05-20.pdf"
    );
}
