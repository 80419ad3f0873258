//! GUI entry point for Offer Pilot

mod app;
mod export_panel;
mod order_panel;

use app::OfferApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Offer Pilot",
        options,
        Box::new(|cc| Ok(Box::new(OfferApp::new(cc)))),
    )
}
