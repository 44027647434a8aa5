pub mod app_implementation;
pub mod app_state;
pub mod clients_panel;
pub mod document_dialog;
pub mod form;
pub mod mappers;

pub use app_state::QuotationDeskApp;
