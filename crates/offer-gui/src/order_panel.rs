//! Order form sections

use chrono::NaiveDate;
use eframe::egui::{self, TextEdit, TextStyle, Ui};

use offer_domain::model::{OrderForm, SelectionLists};

/// Form sections of the order entry page
pub struct OrderPanel {
    /// Edit buffer for the production date; the form keeps the last
    /// successfully parsed value
    date_text: String,
}

impl OrderPanel {
    pub fn new(form: &OrderForm) -> Self {
        Self {
            date_text: form.production_date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, form: &mut OrderForm, lists: &SelectionLists) {
        self.render_header_section(ui, form, lists);
        ui.add_space(12.0);
        self.render_bulk_section(ui, form);
        ui.add_space(12.0);
        self.render_notes_section(ui, form);
    }

    fn render_header_section(&mut self, ui: &mut Ui, form: &mut OrderForm, lists: &SelectionLists) {
        ui.strong("01. Basis-Spezifikationen");
        ui.add_space(6.0);

        egui::Grid::new("header_grid")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                ui.label("Produktionsdatum");
                let response = ui.add(
                    TextEdit::singleline(&mut self.date_text)
                        .desired_width(120.0)
                        .hint_text("YYYY-MM-DD"),
                );
                if response.changed() {
                    if let Ok(date) = NaiveDate::parse_from_str(self.date_text.trim(), "%Y-%m-%d")
                    {
                        form.production_date = date;
                    }
                }
                ui.end_row();

                ui.label("Department");
                combo(ui, "dept", &mut form.department, &lists.departments);
                ui.end_row();

                ui.label("Ziel-Land");
                combo(ui, "country", &mut form.country, &lists.countries);
                ui.end_row();

                ui.label("Art der Nummer");
                combo(ui, "num_type", &mut form.number_type, &lists.number_types);
                ui.end_row();

                ui.label("Nummer (max. 10 Stellen)");
                let response = ui.add(
                    TextEdit::singleline(&mut form.number_value)
                        .char_limit(OrderForm::NUMBER_MAX_LEN)
                        .hint_text("Ident-No.")
                        .font(TextStyle::Monospace)
                        .desired_width(160.0),
                );
                if response.changed() {
                    let normalized = OrderForm::normalize_number(&form.number_value);
                    form.number_value = normalized;
                }
                ui.end_row();
            });
    }

    fn render_bulk_section(&mut self, ui: &mut Ui, form: &mut OrderForm) {
        ui.strong("02. Options-Codes Bulk Input");
        ui.add_space(6.0);
        ui.add(
            TextEdit::multiline(&mut form.bulk_codes)
                .desired_rows(4)
                .desired_width(f32::INFINITY)
                .font(TextStyle::Monospace)
                .hint_text("Codes hier einfügen (z.B. 1AB 2TC)..."),
        );
    }

    fn render_notes_section(&mut self, ui: &mut Ui, form: &mut OrderForm) {
        ui.strong("03. Zusätzliche technische Hinweise (XXXL)");
        ui.add_space(6.0);
        ui.add(
            TextEdit::multiline(&mut form.notes)
                .desired_rows(14)
                .desired_width(f32::INFINITY)
                .font(TextStyle::Monospace)
                .hint_text("Technische Daten und Preiszeilen einfügen..."),
        );
    }
}

fn combo(ui: &mut Ui, id: &str, value: &mut String, options: &[String]) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(value.as_str())
        .width(220.0)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, option.clone(), option.as_str());
            }
        });
}
