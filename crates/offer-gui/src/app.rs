//! Main application structure

use std::sync::Arc;

use chrono::NaiveDate;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use offer_app::config::Config;
use offer_app::export::report::format_eur;
use offer_app::providers::{open_catalog, open_price_book};
use offer_domain::model::{OrderForm, Quote, SelectionLists};
use offer_domain::repository::{MemoryCatalog, MemoryPriceBook};
use offer_domain::service::calculate_quote;

use crate::export_panel::ExportPanel;
use crate::order_panel::OrderPanel;

/// Main application state
pub struct OfferApp {
    /// Application configuration
    config: Config,
    /// Fixed selection lists the form fields choose from
    lists: SelectionLists,
    /// Captured form state
    form: OrderForm,
    /// Injected option catalog (shared with export threads)
    catalog: Arc<MemoryCatalog>,
    /// Injected price book (shared with export threads)
    prices: Arc<MemoryPriceBook>,
    /// Derived quote for the current date and bulk codes
    quote: Quote,
    /// Inputs the quote was last derived from
    quote_inputs: (NaiveDate, String),
    /// Form section rendering state
    order_panel: OrderPanel,
    /// Export side panel state
    export_panel: ExportPanel,
}

impl OfferApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::load().unwrap_or_default();
        let catalog = Arc::new(open_catalog(&config).unwrap_or_default());
        let prices = Arc::new(open_price_book(&config).unwrap_or_default());

        let lists = SelectionLists::default();
        let form = OrderForm::new(&lists, chrono::Local::now().date_naive());
        let quote = calculate_quote(
            form.production_date,
            &form.bulk_codes,
            catalog.as_ref(),
            prices.as_ref(),
        );
        let quote_inputs = (form.production_date, form.bulk_codes.clone());

        let order_panel = OrderPanel::new(&form);
        let export_panel = ExportPanel::new(&config);

        Self {
            config,
            lists,
            form,
            catalog,
            prices,
            quote,
            quote_inputs,
            order_panel,
            export_panel,
        }
    }

    /// Recompute the derived quote when date or bulk text changed
    fn refresh_quote(&mut self) {
        if self.quote_inputs.0 != self.form.production_date
            || self.quote_inputs.1 != self.form.bulk_codes
        {
            self.quote = calculate_quote(
                self.form.production_date,
                &self.form.bulk_codes,
                self.catalog.as_ref(),
                self.prices.as_ref(),
            );
            self.quote_inputs = (self.form.production_date, self.form.bulk_codes.clone());
        }
    }

    fn render_quote(&self, ui: &mut egui::Ui) {
        ui.strong("Kalkulation");
        ui.add_space(4.0);

        if self.quote.items.is_empty() {
            ui.label("Keine Optionen eingegeben.");
        } else {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(60.0))
                .column(Column::remainder())
                .column(Column::auto().at_least(90.0))
                .header(18.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Code");
                    });
                    header.col(|ui| {
                        ui.strong("Beschreibung");
                    });
                    header.col(|ui| {
                        ui.strong("Preis");
                    });
                })
                .body(|mut body| {
                    for item in &self.quote.items {
                        body.row(16.0, |mut row| {
                            row.col(|ui| {
                                ui.monospace(item.code.as_str());
                            });
                            row.col(|ui| {
                                ui.label(item.description.as_str());
                            });
                            row.col(|ui| {
                                ui.label(format_eur(item.price));
                            });
                        });
                    }
                });
        }

        ui.add_space(4.0);
        ui.label(format!("GESAMTSUMME: {}", format_eur(self.quote.total)));
    }
}

impl eframe::App for OfferApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("export_panel")
            .min_width(280.0)
            .show(ctx, |ui| {
                self.export_panel.ui(
                    ui,
                    &mut self.form,
                    &self.lists,
                    &self.config,
                    self.catalog.clone(),
                    self.prices.clone(),
                );
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Order Entry");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(self.config.sales_person.as_str());
                    });
                });
                ui.separator();
                ui.add_space(8.0);

                self.order_panel.ui(ui, &mut self.form, &self.lists);

                self.refresh_quote();

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);
                self.render_quote(ui);
            });
        });
    }
}
