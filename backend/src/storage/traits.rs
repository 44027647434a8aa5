//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;

use crate::domain::models::client::Client as DomainClient;

/// Trait defining the interface for client storage operations
///
/// This trait abstracts away the specific storage implementation details,
/// allowing the domain layer to work with different storage backends
/// without modification. All operations are synchronous for the desktop-only
/// egui app.
pub trait ClientStorage: Send + Sync {
    /// Store a new client
    fn store_client(&self, client: &DomainClient) -> Result<()>;

    /// Retrieve a specific client by ID
    fn get_client(&self, client_id: &str) -> Result<Option<DomainClient>>;

    /// Find a client by company name, ignoring case
    fn find_by_company(&self, company: &str) -> Result<Option<DomainClient>>;

    /// List all clients ordered by company name
    fn list_clients(&self) -> Result<Vec<DomainClient>>;

    /// Update an existing client
    fn update_client(&self, client: &DomainClient) -> Result<()>;

    /// Delete a client by ID
    /// Returns true if the client was found and deleted, false otherwise
    fn delete_client(&self, client_id: &str) -> Result<bool>;
}
