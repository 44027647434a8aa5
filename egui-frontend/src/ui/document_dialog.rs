//! # Generate Document Dialog
//!
//! Modal collecting the template path and an optional output path, then
//! handing the form to the backend document service. Leaving the output path
//! empty writes the document under the user's Documents folder with a
//! generated filename.

use eframe::egui;

use crate::ui::app_state::QuotationDeskApp;

const DIALOG_SIZE: egui::Vec2 = egui::Vec2::new(480.0, 300.0);

impl QuotationDeskApp {
    /// Render the generate-document modal
    pub fn render_document_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_document_dialog {
            return;
        }

        egui::Area::new(egui::Id::new("document_dialog_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                // Dark semi-transparent background
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                );

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(&ui.style())
                            .fill(egui::Color32::WHITE)
                            .stroke(egui::Stroke::new(2.0, egui::Color32::from_rgb(70, 130, 180)))
                            .rounding(egui::Rounding::same(12.0))
                            .inner_margin(egui::Margin::same(20.0))
                            .show(ui, |ui| {
                                ui.set_min_size(DIALOG_SIZE);
                                ui.set_max_size(DIALOG_SIZE);

                                ui.vertical_centered(|ui| {
                                    ui.add_space(10.0);

                                    ui.label(
                                        egui::RichText::new("📄 Generar documento")
                                            .font(egui::FontId::new(
                                                22.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong()
                                            .color(egui::Color32::from_rgb(70, 130, 180)),
                                    );

                                    ui.add_space(16.0);

                                    self.render_dialog_fields(ui);

                                    ui.add_space(20.0);

                                    ui.horizontal(|ui| {
                                        ui.add_space(90.0);
                                        if ui.button("Cancelar").clicked() {
                                            self.show_document_dialog = false;
                                        }
                                        ui.add_space(10.0);
                                        if ui
                                            .button(egui::RichText::new("Generar").strong())
                                            .clicked()
                                        {
                                            self.generate_document();
                                        }
                                    });
                                });
                            });
                    });
                });
            });
    }

    fn render_dialog_fields(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.label("Plantilla (.txt con {marcadores}):");
            ui.add(
                egui::TextEdit::singleline(&mut self.template_path)
                    .hint_text("~/plantillas/presupuesto.txt")
                    .desired_width(420.0),
            );

            ui.add_space(10.0);

            ui.label("Guardar como (opcional):");
            ui.add(
                egui::TextEdit::singleline(&mut self.output_path)
                    .hint_text("Vacío: se genera en Documentos")
                    .desired_width(420.0),
            );

            // Show the dialog's own error inline so the user doesn't have to
            // close it to read the message behind
            if let Some(error) = &self.error_message {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
            }
        });
    }
}
