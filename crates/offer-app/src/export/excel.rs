//! Excel quotation builder
//!
//! Renders the multi-page quotation layout: header block and equipment
//! sections on page 1, optional equipment and the price summary on page 2,
//! technical data on the last page.

use std::path::Path;

use rust_xlsxwriter::{Format, FormatBorder, FormatUnderline, Workbook, Worksheet, XlsxError};

use offer_domain::model::{NormalizedVehicle, OrderForm, VehicleItem};
use offer_types::{Error, Result};

const COLUMN_WIDTHS: [f64; 6] = [22.0, 22.0, 45.0, 12.0, 18.0, 10.0];

const TECHNICAL_LINES: [&str; 15] = [
    "Weight",
    "Unladen DIN (without Driver) kg",
    "Unladen EU kg",
    "Gross vehicle weight kg",
    "Engine",
    "Cylinders/valves",
    "Capacity cc3",
    "Output/Engine Speed kW(hp) / rpm",
    "Engine Torque Nm",
    "Performance",
    "Top Speed3 km/h",
    "Acceleration 0-100 km/h s",
    "Fuel Consumption",
    "Combined l/100 km",
    "CO2 emissions g/km",
];

fn exl(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Write the quotation workbook for a form and its normalized vehicle
pub fn write_quotation(
    form: &OrderForm,
    vehicle: &NormalizedVehicle,
    sales_person: &str,
    path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Quotation").map_err(exl)?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width).map_err(exl)?;
    }
    sheet.set_header("&LLOGO 1&RLOGO 2");

    let bold = Format::new().set_bold();
    let section = Format::new()
        .set_bold()
        .set_underline(FormatUnderline::Single);
    let thin_rule = Format::new().set_border_bottom(FormatBorder::Thin);
    let double_rule = Format::new().set_border_bottom(FormatBorder::Double);

    let mut page_breaks: Vec<u32> = Vec::new();

    // ----- Page 1: header block -----
    rule_row(sheet, 2, &thin_rule)?;

    sheet.write_string(3, 0, "Quotation").map_err(exl)?;
    sheet
        .write_string(3, 1, form.production_date.format("%d.%m.%Y").to_string())
        .map_err(exl)?;
    sheet.write_string(3, 4, &form.country).map_err(exl)?;

    sheet.write_string(4, 0, "Department").map_err(exl)?;
    sheet.write_string(4, 1, &form.department).map_err(exl)?;

    sheet.write_string(5, 0, "Sales Person").map_err(exl)?;
    sheet.write_string(5, 1, sales_person).map_err(exl)?;

    sheet.write_string(6, 0, &form.number_type).map_err(exl)?;
    sheet.write_string(6, 1, &form.number_value).map_err(exl)?;

    sheet.write_string(7, 0, "Net Price Mode").map_err(exl)?;
    sheet.write_string(7, 1, &form.net_mode).map_err(exl)?;

    sheet.write_string(8, 0, "Total Price Mode").map_err(exl)?;
    sheet.write_string(8, 1, &form.total_mode).map_err(exl)?;

    sheet.write_string(9, 0, "Vehicle Status").map_err(exl)?;
    sheet
        .write_string(9, 1, "STOCK / TO ORDER")
        .map_err(exl)?;
    rule_row(sheet, 10, &thin_rule)?;

    sheet.write_string(11, 3, "Country").map_err(exl)?;
    sheet.write_string(11, 4, "Page 1").map_err(exl)?;

    sheet
        .write_string_with_format(12, 1, "Option Code", &section)
        .map_err(exl)?;
    sheet
        .write_string_with_format(12, 2, "Description", &section)
        .map_err(exl)?;
    sheet.write_string(12, 4, "Price").map_err(exl)?;

    // ----- Page 1: equipment sections -----
    let mut row: u32 = 13;

    sheet
        .write_string_with_format(row, 0, "Basic Vehicle", &section)
        .map_err(exl)?;
    row += 1;
    row = write_items(sheet, row, &vehicle.base)?;

    sheet
        .write_string_with_format(row, 0, "Exterior Color", &section)
        .map_err(exl)?;
    row += 1;
    sheet
        .write_string_with_format(row, 0, "Interior Color", &section)
        .map_err(exl)?;
    row += 1;
    sheet.write_string(row, 0, "Interior Trim").map_err(exl)?;
    row += 1;
    rule_row(sheet, row, &thin_rule)?;
    row += 1;

    sheet
        .write_string_with_format(row, 0, "Standard Equipment", &section)
        .map_err(exl)?;
    row += 1;
    row = write_items(sheet, row, &vehicle.standard)?;
    row += 1;

    sheet
        .write_string_with_format(row, 0, "Security Equipment", &section)
        .map_err(exl)?;
    row += 1;
    row = write_items(sheet, row, &vehicle.security)?;
    row += 2;

    // ----- Page 2: optional equipment and price summary -----
    page_breaks.push(row);

    sheet.write_string(row, 0, &form.number_type).map_err(exl)?;
    sheet.write_string(row, 1, &form.number_value).map_err(exl)?;
    sheet.write_string(row, 4, "Page 2").map_err(exl)?;
    row += 2;

    sheet
        .write_string_with_format(row, 0, "Optional Equipment", &section)
        .map_err(exl)?;
    row += 1;
    row = write_items(sheet, row, &vehicle.optional)?;
    row += 1;

    sheet
        .write_string_with_format(row, 0, "Editions", &section)
        .map_err(exl)?;
    sheet
        .write_string(row, 1, "Basic Vehicle Price")
        .map_err(exl)?;
    sheet
        .write_number(row, 4, NormalizedVehicle::subtotal(&vehicle.base))
        .map_err(exl)?;
    row += 1;

    sheet.write_string(row, 1, "Security Package").map_err(exl)?;
    sheet
        .write_number(row, 4, NormalizedVehicle::subtotal(&vehicle.security))
        .map_err(exl)?;
    row += 1;

    sheet
        .write_string(row, 1, "Optional Equipment")
        .map_err(exl)?;
    sheet
        .write_number(row, 4, NormalizedVehicle::subtotal(&vehicle.optional))
        .map_err(exl)?;
    row += 1;

    sheet
        .write_string(row, 1, "Technical Adjustment")
        .map_err(exl)?;
    sheet.write_number(row, 4, 0.0).map_err(exl)?;
    row += 1;
    rule_row(sheet, row, &thin_rule)?;
    row += 1;

    sheet.write_string(row, 1, "Transportation").map_err(exl)?;
    sheet.write_number(row, 4, 0.0).map_err(exl)?;
    row += 1;

    sheet.write_string(row, 1, "Special Discount").map_err(exl)?;
    sheet.write_number(row, 4, 0.0).map_err(exl)?;
    row += 1;
    rule_row(sheet, row, &thin_rule)?;
    row += 1;

    sheet
        .write_string_with_format(row, 1, "Total Price", &bold)
        .map_err(exl)?;
    sheet
        .write_number_with_format(row, 4, vehicle.total_price, &bold)
        .map_err(exl)?;
    row += 1;
    rule_row(sheet, row, &double_rule)?;
    row += 3;

    // ----- Page 3: technical data -----
    page_breaks.push(row);

    sheet.write_string(row, 0, &form.number_type).map_err(exl)?;
    sheet.write_string(row, 1, &form.number_value).map_err(exl)?;
    sheet.write_string(row, 4, "Page 3").map_err(exl)?;
    row += 2;

    sheet
        .write_string_with_format(row, 0, "Technical Data", &section)
        .map_err(exl)?;
    row += 1;

    for line in TECHNICAL_LINES {
        sheet.write_string(row, 0, line).map_err(exl)?;
        sheet.write_string(row, 2, "Text / Number").map_err(exl)?;
        row += 1;
    }

    sheet.set_page_breaks(&page_breaks).map_err(exl)?;
    workbook.save(path).map_err(exl)?;

    Ok(())
}

/// Write code/description/price item rows, returning the next free row
fn write_items(sheet: &mut Worksheet, start: u32, items: &[VehicleItem]) -> Result<u32> {
    let mut row = start;
    for item in items {
        sheet.write_string(row, 1, &item.code).map_err(exl)?;
        sheet.write_string(row, 2, &item.text).map_err(exl)?;
        sheet.write_number(row, 4, item.price).map_err(exl)?;
        row += 1;
    }
    Ok(row)
}

/// Draw a bottom border across columns A-F of a row
fn rule_row(sheet: &mut Worksheet, row: u32, format: &Format) -> Result<()> {
    for col in 0..COLUMN_WIDTHS.len() as u16 {
        sheet.write_blank(row, col, format).map_err(exl)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use offer_domain::model::SelectionLists;

    #[test]
    fn writes_workbook_for_empty_vehicle() {
        let lists = SelectionLists::default();
        let form = OrderForm::new(&lists, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        let vehicle = NormalizedVehicle::default();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotation.xlsx");
        write_quotation(&form, &vehicle, "Max Mustermann", &path).unwrap();

        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn writes_workbook_with_items() {
        let lists = SelectionLists::default();
        let mut form = OrderForm::new(&lists, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        form.set_number_value("WBA71234");

        let vehicle = NormalizedVehicle {
            base: vec![VehicleItem {
                code: "G05".to_string(),
                text: "X5 xDrive40i".to_string(),
                price: 0.0,
            }],
            standard: vec![],
            optional: vec![VehicleItem {
                code: "3AB".to_string(),
                text: "Sitzheizung".to_string(),
                price: 100.0,
            }],
            security: vec![],
            total_price: 100.0,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotation.xlsx");
        write_quotation(&form, &vehicle, "Max Mustermann", &path).unwrap();
        assert!(path.exists());
    }
}
