use eframe::egui;
use log::{error, info};

mod ui;

use ui::QuotationDeskApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Quotation Desk egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([860.0, 620.0])
            .with_min_inner_size([680.0, 480.0])
            .with_title("Gestión de Presupuestos")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Gestión de Presupuestos",
        options,
        Box::new(|cc| match QuotationDeskApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Quotation Desk app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
