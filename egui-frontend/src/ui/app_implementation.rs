use eframe::egui;

use crate::ui::app_state::QuotationDeskApp;

impl eframe::App for QuotationDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load the saved clients on first run
        if !self.clients_loaded {
            self.reload_clients();
        }

        // Keep repainting while a message is on screen so it can be read
        if self.error_message.is_some() || self.success_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(5));
        }

        self.render_clients_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);

            ui.separator();

            self.render_messages(ui);

            self.render_quotation_form(ui);
        });

        self.render_document_dialog(ctx);
    }
}

impl QuotationDeskApp {
    /// Render the header
    fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("📄 Gestión de Presupuestos")
                    .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Same date the document header will carry
                ui.label(
                    egui::RichText::new(
                        chrono::Local::now().format("📅 %d/%m/%Y").to_string(),
                    )
                    .font(egui::FontId::new(15.0, egui::FontFamily::Proportional)),
                );
                ui.label(
                    egui::RichText::new(format!("👥 {} clientes", self.clients.len()))
                        .font(egui::FontId::new(15.0, egui::FontFamily::Proportional)),
                );
            });
        });
    }

    /// Render error and success messages
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.error_message {
            ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
        }
        if let Some(success) = &self.success_message {
            ui.colored_label(egui::Color32::from_rgb(0, 140, 0), format!("✅ {}", success));
        }
    }
}
