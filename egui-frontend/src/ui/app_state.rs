//! # App State Module
//!
//! Central application state for the quotation desk app: the backend handle,
//! the form being edited, the cached client list, and the state of the
//! generate-document dialog. All state lives in one struct so the render
//! methods in the other modules can share it without globals.

use log::info;
use quotation_desk_backend::domain::amount_words;
use quotation_desk_backend::domain::commands::clients::{
    CreateClientCommand, DeleteClientCommand,
};
use quotation_desk_backend::Backend;
use shared::{Client, GenerateDocumentRequest, QuotationForm};

use crate::ui::mappers;

/// Main application struct for the egui quotation desk
pub struct QuotationDeskApp {
    pub backend: Backend,

    // Form state
    pub form: QuotationForm,
    /// Live spelling of the price field, recomputed on every edit
    pub price_in_words: String,

    // Client list state
    pub clients: Vec<Client>,
    pub clients_loaded: bool,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,

    // Generate-document dialog state
    pub show_document_dialog: bool,
    pub template_path: String,
    pub output_path: String,
}

impl QuotationDeskApp {
    /// Create a new QuotationDeskApp with default values
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("Initializing QuotationDeskApp");

        let backend = Backend::new()?;

        Ok(Self {
            backend,

            form: QuotationForm::default(),
            price_in_words: String::new(),

            clients: Vec::new(),
            clients_loaded: false,

            error_message: None,
            success_message: None,

            show_document_dialog: false,
            template_path: String::new(),
            output_path: String::new(),
        })
    }

    /// Clear success/error messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// Reload the saved client list from the backend
    pub fn reload_clients(&mut self) {
        match self.backend.client_service.list_clients() {
            Ok(result) => {
                self.clients = result.clients.iter().map(mappers::to_client_dto).collect();
                self.clients_loaded = true;
            }
            Err(e) => {
                self.error_message = Some(format!("No se pudieron cargar los clientes: {}", e));
                self.clients_loaded = true;
            }
        }
    }

    /// Recompute the price-in-words preview from the price field.
    /// An empty field clears the preview instead of flagging it as invalid.
    pub fn refresh_price_in_words(&mut self) {
        if self.form.price.trim().is_empty() {
            self.price_in_words.clear();
        } else {
            self.price_in_words = amount_words::amount_text(&self.form.price);
        }
    }

    /// Save the company fields of the form as a client record
    pub fn save_client(&mut self) {
        self.clear_messages();

        let command = CreateClientCommand {
            company: self.form.company.clone(),
            address: self.form.address.clone(),
            locality: self.form.locality.clone(),
        };

        match self.backend.client_service.create_client(command) {
            Ok(result) => {
                self.success_message =
                    Some(format!("Cliente '{}' guardado.", result.client.company));
                self.reload_clients();
            }
            Err(e) => {
                self.error_message = Some(format!("{}", e));
            }
        }
    }

    /// Copy a saved client into the form
    pub fn load_client_into_form(&mut self, client: &Client) {
        self.form.company = client.company.clone();
        self.form.address = client.address.clone();
        self.form.locality = client.locality.clone();
    }

    /// Delete a saved client
    pub fn delete_client(&mut self, client_id: &str) {
        self.clear_messages();

        let command = DeleteClientCommand {
            client_id: client_id.to_string(),
        };

        match self.backend.client_service.delete_client(command) {
            Ok(result) => {
                self.success_message = Some(result.success_message);
                self.reload_clients();
            }
            Err(e) => {
                self.error_message = Some(format!("{}", e));
            }
        }
    }

    /// Fill the selected template and write the quotation document
    pub fn generate_document(&mut self) {
        self.clear_messages();

        let request = GenerateDocumentRequest {
            form: self.form.clone(),
            template_path: self.template_path.trim().to_string(),
            output_path: if self.output_path.trim().is_empty() {
                None
            } else {
                Some(self.output_path.clone())
            },
        };

        match self.backend.document_service.generate(request) {
            Ok(response) if response.success => {
                self.success_message =
                    Some(format!("{} ({})", response.message, response.file_path));
                self.show_document_dialog = false;
            }
            Ok(response) => {
                self.error_message = Some(response.message);
            }
            Err(e) => {
                self.error_message = Some(format!("No se pudo generar el documento: {}", e));
            }
        }
    }
}
