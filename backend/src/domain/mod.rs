//! Domain layer: the amount-in-words converter plus the services the UI
//! calls directly.

pub mod amount_words;
pub mod client_service;
pub mod commands;
pub mod document_service;
pub mod models;

pub use client_service::ClientService;
pub use document_service::DocumentService;
