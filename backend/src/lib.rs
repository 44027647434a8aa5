//! # Quotation Desk Backend
//!
//! This backend crate provides direct access to domain services and storage
//! for the egui frontend:
//! - Uses synchronous operations (no async/await)
//! - Provides direct access to domain services
//! - Has no IO/REST layer

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::csv::CsvConnection;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub client_service: domain::ClientService,
    pub document_service: domain::DocumentService,
}

impl Backend {
    /// Create a new backend instance with the default data directory
    /// (platform data dir, falling back to a temp dir).
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("quotation-desk");
        Self::with_data_directory(data_dir)
    }

    /// Create a backend over an explicit data directory.
    pub fn with_data_directory(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let csv_conn = Arc::new(CsvConnection::new(data_dir.into())?);

        let client_service = domain::ClientService::new(csv_conn);
        let document_service = domain::DocumentService::new();

        Ok(Backend {
            client_service,
            document_service,
        })
    }
}
