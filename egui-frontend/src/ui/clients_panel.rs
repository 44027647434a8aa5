//! # Clients Panel
//!
//! Side panel listing the saved clients. Selecting one copies its company,
//! address and locality into the form; the trash button removes the record.

use eframe::egui;

use crate::ui::app_state::QuotationDeskApp;

impl QuotationDeskApp {
    /// Render the saved-clients side panel
    pub fn render_clients_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("clients_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new("👥 Clientes")
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong(),
                );
                ui.separator();

                if self.clients.is_empty() {
                    ui.label(
                        egui::RichText::new("Sin clientes guardados")
                            .italics()
                            .color(egui::Color32::GRAY),
                    );
                    return;
                }

                // Defer the actions so the list isn't mutated mid-iteration
                let mut to_load: Option<shared::Client> = None;
                let mut to_delete: Option<String> = None;

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for client in &self.clients {
                        ui.horizontal(|ui| {
                            if ui
                                .button(egui::RichText::new(&client.company).size(14.0))
                                .on_hover_text(format!(
                                    "{} — {}",
                                    client.address, client.locality
                                ))
                                .clicked()
                            {
                                to_load = Some(client.clone());
                            }

                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("🗑").clicked() {
                                        to_delete = Some(client.id.clone());
                                    }
                                },
                            );
                        });
                    }
                });

                if let Some(client) = to_load {
                    self.load_client_into_form(&client);
                }
                if let Some(client_id) = to_delete {
                    self.delete_client(&client_id);
                }
            });
    }
}
