//! Export side panel with background export worker

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use eframe::egui::{self, Color32, RichText, Ui};

use offer_app::config::Config;
use offer_app::export::{export_local, export_remote};
use offer_domain::model::{OrderForm, SelectionLists};
use offer_domain::repository::{MemoryCatalog, MemoryPriceBook};
use offer_types::{ExportFormat, ExportMode};

/// Outcome message from the export worker thread
enum ExportOutcome {
    Done(PathBuf),
    Failed(String),
}

/// Side panel: price modes, export configuration, and the export action
pub struct ExportPanel {
    mode: ExportMode,
    format: ExportFormat,
    output_dir: PathBuf,
    /// Status message (message, is_error)
    status: Option<(String, bool)>,
    /// Whether an export job is in flight
    is_exporting: bool,
    /// Receiver for the outcome of the running export job
    receiver: Option<Receiver<ExportOutcome>>,
}

impl ExportPanel {
    pub fn new(config: &Config) -> Self {
        Self {
            mode: ExportMode::default(),
            format: config.default_format,
            output_dir: config.output_dir(),
            status: None,
            is_exporting: false,
            receiver: None,
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        form: &mut OrderForm,
        lists: &SelectionLists,
        config: &Config,
        catalog: Arc<MemoryCatalog>,
        prices: Arc<MemoryPriceBook>,
    ) {
        self.poll_status(ui.ctx());

        ui.strong("Config & Export");
        ui.add_space(8.0);

        ui.label("Net Mode");
        mode_combo(ui, "net_mode", &mut form.net_mode, &lists.net_modes);
        ui.add_space(4.0);
        ui.label("Total Mode");
        mode_combo(ui, "total_mode", &mut form.total_mode, &lists.total_modes);

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        ui.label("Modus");
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.mode, ExportMode::Local, "Lokal");
            ui.radio_value(&mut self.mode, ExportMode::Remote, "Backend");
        });

        ui.add_space(4.0);
        ui.label("Format");
        egui::ComboBox::from_id_salt("export_format")
            .selected_text(self.format.to_string())
            .show_ui(ui, |ui| {
                for format in [ExportFormat::Excel, ExportFormat::Pdf, ExportFormat::Report] {
                    ui.selectable_value(&mut self.format, format, format.to_string());
                }
            });

        ui.add_space(4.0);
        ui.label("Zielordner");
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(self.output_dir.display().to_string())
                    .small()
                    .color(Color32::GRAY),
            );
            if ui.button("…").clicked() {
                if let Some(folder) = rfd::FileDialog::new().pick_folder() {
                    self.output_dir = folder;
                }
            }
        });

        ui.add_space(12.0);

        let export_clicked = ui
            .add_enabled(!self.is_exporting, egui::Button::new("Export"))
            .clicked();
        if export_clicked {
            self.start_export(form.clone(), config, catalog, prices);
        }

        if self.is_exporting {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Export läuft...");
            });
        }

        if let Some((ref message, is_error)) = self.status {
            ui.add_space(10.0);
            let color = if is_error {
                Color32::LIGHT_RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.label(RichText::new(message).color(color));
        }
    }

    /// Spawn the export worker for the current form snapshot
    fn start_export(
        &mut self,
        form: OrderForm,
        config: &Config,
        catalog: Arc<MemoryCatalog>,
        prices: Arc<MemoryPriceBook>,
    ) {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        self.is_exporting = true;
        self.status = None;

        let mode = self.mode;
        let format = self.format;
        let output_dir = self.output_dir.clone();
        let backend_url = config.backend_url.clone();
        let timeout = Duration::from_secs(config.timeout_secs);
        let sales_person = config.sales_person.clone();

        thread::spawn(move || {
            let result = match mode {
                ExportMode::Local => export_local(
                    &form,
                    format,
                    catalog.as_ref(),
                    prices.as_ref(),
                    &output_dir,
                    &sales_person,
                ),
                ExportMode::Remote => {
                    export_remote(&form, format, &backend_url, timeout, &output_dir)
                }
            };
            let outcome = match result {
                Ok(path) => ExportOutcome::Done(path),
                Err(e) => ExportOutcome::Failed(e.to_string()),
            };
            let _ = sender.send(outcome);
        });
    }

    /// Poll for the outcome of the running export job
    fn poll_status(&mut self, ctx: &egui::Context) {
        let Some(ref receiver) = self.receiver else {
            return;
        };

        match receiver.try_recv() {
            Ok(ExportOutcome::Done(path)) => {
                self.status = Some((format!("Export gespeichert: {}", path.display()), false));
                self.is_exporting = false;
                self.receiver = None;
            }
            Ok(ExportOutcome::Failed(message)) => {
                self.status = Some((format!("Export fehlgeschlagen: {}", message), true));
                self.is_exporting = false;
                self.receiver = None;
            }
            Err(TryRecvError::Empty) => {
                // Keep repainting while the worker runs
                ctx.request_repaint_after(Duration::from_millis(200));
            }
            Err(TryRecvError::Disconnected) => {
                self.status = Some(("Export abgebrochen".to_string(), true));
                self.is_exporting = false;
                self.receiver = None;
            }
        }
    }
}

fn mode_combo(ui: &mut Ui, id: &str, value: &mut String, options: &[String]) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(value.as_str())
        .width(240.0)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, option.clone(), option.as_str());
            }
        });
}
