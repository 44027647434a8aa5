//! # Quotation Form
//!
//! The central form of the app: the company and pricing fields, the live
//! price-in-words preview, and the action buttons. The preview is recomputed
//! through the backend converter on every edit of the price field, so the
//! user sees the spelled-out amount (or the invalid-number notice) while
//! typing.

use eframe::egui;

use crate::ui::app_state::QuotationDeskApp;

const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(60, 60, 60);

impl QuotationDeskApp {
    /// Render the quotation form
    pub fn render_quotation_form(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);

        egui::Grid::new("quotation_form_grid")
            .num_columns(2)
            .spacing([14.0, 8.0])
            .show(ui, |ui| {
                self.text_row(ui, "Compañía:", |form| &mut form.company);
                self.text_row(ui, "Domicilio:", |form| &mut form.address);
                self.text_row(ui, "Localidad:", |form| &mut form.locality);
                self.text_row(ui, "Tipo de servicio:", |form| &mut form.service_type);
                self.text_row(ui, "Cantidad de meses o mensual:", |form| &mut form.term);
                self.text_row(ui, "Referencia:", |form| &mut form.reference);

                form_label(ui, "Precio:");
                let price_response = ui.add(
                    egui::TextEdit::singleline(&mut self.form.price)
                        .hint_text("1.500.000,00")
                        .desired_width(180.0),
                );
                if price_response.changed() {
                    self.refresh_price_in_words();
                }
                ui.end_row();

                form_label(ui, "Precio en letras:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.price_in_words)
                        .interactive(false)
                        .desired_width(420.0),
                );
                ui.end_row();
            });

        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if ui
                .button(egui::RichText::new("💾 Guardar cliente").size(15.0))
                .clicked()
            {
                self.save_client();
            }

            ui.add_space(10.0);

            if ui
                .button(egui::RichText::new("📄 Generar documento…").size(15.0))
                .clicked()
            {
                self.clear_messages();
                self.show_document_dialog = true;
            }
        });
    }

    fn text_row(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        field: impl FnOnce(&mut shared::QuotationForm) -> &mut String,
    ) {
        form_label(ui, label);
        ui.add(egui::TextEdit::singleline(field(&mut self.form)).desired_width(420.0));
        ui.end_row();
    }
}

fn form_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
            .color(LABEL_COLOR),
    );
}
