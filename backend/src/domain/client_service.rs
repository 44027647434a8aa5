use anyhow::Result;
use chrono::Utc;
use log::{debug, info, warn};
use std::sync::Arc;

use crate::domain::commands::clients::{
    CreateClientCommand, CreateClientResult, DeleteClientCommand, DeleteClientResult,
    GetClientCommand, GetClientResult, ListClientsResult, UpdateClientCommand, UpdateClientResult,
};
use crate::domain::models::client::Client;
use crate::storage::csv::{ClientRepository, CsvConnection};
use crate::storage::traits::ClientStorage;

/// Service for managing the saved client table.
#[derive(Clone)]
pub struct ClientService {
    client_repository: ClientRepository,
}

impl ClientService {
    /// Create a new ClientService
    pub fn new(csv_conn: Arc<CsvConnection>) -> Self {
        let client_repository = ClientRepository::new(csv_conn);
        Self { client_repository }
    }

    /// Create a new client
    pub fn create_client(&self, command: CreateClientCommand) -> Result<CreateClientResult> {
        info!("Creating client: company={}", command.company);

        self.validate_company(&command.company)?;
        self.ensure_company_is_unique(&command.company, None)?;

        let now = Utc::now();
        let client = Client {
            id: Client::generate_id(now.timestamp_millis() as u64),
            company: command.company.trim().to_string(),
            address: command.address.trim().to_string(),
            locality: command.locality.trim().to_string(),
            created_at: now,
            updated_at: now,
        };

        self.client_repository.store_client(&client)?;

        info!("Created client: {} with ID: {}", client.company, client.id);

        Ok(CreateClientResult { client })
    }

    /// Get a client by ID
    pub fn get_client(&self, command: GetClientCommand) -> Result<GetClientResult> {
        debug!("Getting client: {}", command.client_id);

        let client = self.client_repository.get_client(&command.client_id)?;

        if client.is_none() {
            warn!("Client not found: {}", command.client_id);
        }

        Ok(GetClientResult { client })
    }

    /// List all clients ordered by company name
    pub fn list_clients(&self) -> Result<ListClientsResult> {
        debug!("Listing all clients");

        let clients = self.client_repository.list_clients()?;

        debug!("Found {} clients", clients.len());

        Ok(ListClientsResult { clients })
    }

    /// Update an existing client
    pub fn update_client(&self, command: UpdateClientCommand) -> Result<UpdateClientResult> {
        info!("Updating client: {}", command.client_id);

        let mut client = self
            .client_repository
            .get_client(&command.client_id)?
            .ok_or_else(|| anyhow::anyhow!("Client not found: {}", command.client_id))?;

        if let Some(company) = command.company {
            self.validate_company(&company)?;
            self.ensure_company_is_unique(&company, Some(&client.id))?;
            client.company = company.trim().to_string();
        }
        if let Some(address) = command.address {
            client.address = address.trim().to_string();
        }
        if let Some(locality) = command.locality {
            client.locality = locality.trim().to_string();
        }

        client.updated_at = Utc::now();

        self.client_repository.update_client(&client)?;

        info!("Updated client: {} with ID: {}", client.company, client.id);

        Ok(UpdateClientResult { client })
    }

    /// Delete a client
    pub fn delete_client(&self, command: DeleteClientCommand) -> Result<DeleteClientResult> {
        info!("Deleting client: {}", command.client_id);

        let client = self
            .client_repository
            .get_client(&command.client_id)?
            .ok_or_else(|| anyhow::anyhow!("Client not found: {}", command.client_id))?;

        self.client_repository.delete_client(&command.client_id)?;

        info!("Deleted client: {} with ID: {}", client.company, client.id);

        Ok(DeleteClientResult {
            success_message: format!("Cliente '{}' eliminado", client.company),
        })
    }

    fn validate_company(&self, company: &str) -> Result<()> {
        if company.trim().is_empty() {
            return Err(anyhow::anyhow!("El nombre de la compañía no puede estar vacío"));
        }
        if company.len() > 200 {
            return Err(anyhow::anyhow!(
                "El nombre de la compañía no puede superar los 200 caracteres"
            ));
        }
        Ok(())
    }

    /// The company name is the natural key of the table; reject duplicates,
    /// ignoring case. `exclude_id` skips the record being updated.
    fn ensure_company_is_unique(&self, company: &str, exclude_id: Option<&str>) -> Result<()> {
        if let Some(existing) = self.client_repository.find_by_company(company)? {
            if exclude_id != Some(existing.id.as_str()) {
                return Err(anyhow::anyhow!(
                    "Ya existe un cliente con la compañía '{}'",
                    company.trim()
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_service() -> (ClientService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let service = ClientService::new(Arc::new(connection));
        (service, temp_dir)
    }

    fn create_command(company: &str) -> CreateClientCommand {
        CreateClientCommand {
            company: company.to_string(),
            address: "Av. Siempre Viva 742".to_string(),
            locality: "Springfield".to_string(),
        }
    }

    #[test]
    fn test_create_and_get_client() {
        let (service, _temp_dir) = setup_test_service();

        let created = service
            .create_client(create_command("Acme S.A."))
            .expect("Failed to create client");
        assert_eq!(created.client.company, "Acme S.A.");

        let fetched = service
            .get_client(GetClientCommand {
                client_id: created.client.id.clone(),
            })
            .expect("Failed to get client");
        assert_eq!(fetched.client, Some(created.client));
    }

    #[test]
    fn test_empty_company_is_rejected() {
        let (service, _temp_dir) = setup_test_service();

        let result = service.create_client(create_command("   "));
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_company_is_rejected() {
        let (service, _temp_dir) = setup_test_service();

        service
            .create_client(create_command("Acme S.A."))
            .expect("Failed to create client");

        // same company, different case
        let result = service.create_client(create_command("ACME s.a."));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_keeps_company_unique() {
        let (service, _temp_dir) = setup_test_service();

        service
            .create_client(create_command("Acme S.A."))
            .expect("Failed to create client");
        let other = service
            .create_client(create_command("Globex"))
            .expect("Failed to create client");

        let result = service.update_client(UpdateClientCommand {
            client_id: other.client.id.clone(),
            company: Some("Acme S.A.".to_string()),
            address: None,
            locality: None,
        });
        assert!(result.is_err());

        // updating a client without renaming it must not trip the check
        let updated = service
            .update_client(UpdateClientCommand {
                client_id: other.client.id.clone(),
                company: Some("Globex".to_string()),
                address: Some("Calle Falsa 123".to_string()),
                locality: None,
            })
            .expect("Failed to update client");
        assert_eq!(updated.client.address, "Calle Falsa 123");
    }

    #[test]
    fn test_delete_client() {
        let (service, _temp_dir) = setup_test_service();

        let created = service
            .create_client(create_command("Acme S.A."))
            .expect("Failed to create client");

        service
            .delete_client(DeleteClientCommand {
                client_id: created.client.id.clone(),
            })
            .expect("Failed to delete client");

        let listed = service.list_clients().expect("Failed to list clients");
        assert!(listed.clients.is_empty());
    }
}
