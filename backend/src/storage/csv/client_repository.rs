use anyhow::Result;
use csv::{Reader, Writer};
use log::{info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::sync::Arc;

use super::connection::CsvConnection;
use crate::domain::models::client::Client as DomainClient;

/// CSV-based client repository over a single `clients.csv` table.
#[derive(Clone)]
pub struct ClientRepository {
    connection: Arc<CsvConnection>,
}

impl ClientRepository {
    /// Create a new CSV client repository
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self { connection }
    }

    /// Read all clients from the CSV file
    fn read_clients(&self) -> Result<Vec<DomainClient>> {
        self.connection.ensure_clients_file_exists()?;

        let file_path = self.connection.clients_file_path();
        let file = File::open(&file_path)?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut clients = Vec::new();

        for result in csv_reader.records() {
            let record = result?;

            let client = DomainClient {
                id: record.get(0).unwrap_or("").to_string(),
                company: record.get(1).unwrap_or("").to_string(),
                address: record.get(2).unwrap_or("").to_string(),
                locality: record.get(3).unwrap_or("").to_string(),
                created_at: self.parse_timestamp(record.get(4).unwrap_or("")),
                updated_at: self.parse_timestamp(record.get(5).unwrap_or("")),
            };

            if client.id.is_empty() {
                warn!("Skipping clients row without an id in {:?}", file_path);
                continue;
            }

            clients.push(client);
        }

        Ok(clients)
    }

    /// Parse an RFC 3339 timestamp, falling back to now on malformed rows so
    /// one bad row doesn't take the whole table down.
    fn parse_timestamp(&self, raw: &str) -> chrono::DateTime<chrono::Utc> {
        match chrono::DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => dt.with_timezone(&chrono::Utc),
            Err(_) => {
                warn!("Failed to parse timestamp '{}', using current time", raw);
                chrono::Utc::now()
            }
        }
    }

    /// Write all clients back to the CSV file, sorted by company name.
    /// The write is atomic: a temp file is written first, then renamed over.
    fn write_clients(&self, clients: &mut Vec<DomainClient>) -> Result<()> {
        clients.sort_by(|a, b| a.company.to_lowercase().cmp(&b.company.to_lowercase()));

        let file_path = self.connection.clients_file_path();
        let temp_path = file_path.with_extension("tmp");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        let writer = BufWriter::new(file);
        let mut csv_writer = Writer::from_writer(writer);

        csv_writer.write_record([
            "id",
            "company",
            "address",
            "locality",
            "created_at",
            "updated_at",
        ])?;

        for client in clients.iter() {
            csv_writer.write_record([
                client.id.as_str(),
                client.company.as_str(),
                client.address.as_str(),
                client.locality.as_str(),
                &client.created_at.to_rfc3339(),
                &client.updated_at.to_rfc3339(),
            ])?;
        }

        csv_writer.flush()?;
        drop(csv_writer);
        fs::rename(&temp_path, &file_path)?;

        Ok(())
    }
}

impl crate::storage::traits::ClientStorage for ClientRepository {
    /// Store a new client
    fn store_client(&self, client: &DomainClient) -> Result<()> {
        let mut clients = self.read_clients()?;
        clients.push(client.clone());
        self.write_clients(&mut clients)?;
        info!("Stored client: {} ({})", client.company, client.id);
        Ok(())
    }

    /// Retrieve a specific client by ID
    fn get_client(&self, client_id: &str) -> Result<Option<DomainClient>> {
        let clients = self.read_clients()?;
        Ok(clients.into_iter().find(|c| c.id == client_id))
    }

    /// Find a client by company name, ignoring case
    fn find_by_company(&self, company: &str) -> Result<Option<DomainClient>> {
        let needle = company.trim().to_lowercase();
        let clients = self.read_clients()?;
        Ok(clients
            .into_iter()
            .find(|c| c.company.trim().to_lowercase() == needle))
    }

    /// List all clients ordered by company name
    fn list_clients(&self) -> Result<Vec<DomainClient>> {
        // rows are kept sorted on write
        self.read_clients()
    }

    /// Update an existing client
    fn update_client(&self, client: &DomainClient) -> Result<()> {
        let mut clients = self.read_clients()?;
        let position = clients.iter().position(|c| c.id == client.id);

        match position {
            Some(index) => {
                clients[index] = client.clone();
                self.write_clients(&mut clients)?;
                info!("Updated client: {} ({})", client.company, client.id);
                Ok(())
            }
            None => {
                warn!("Attempted to update a non-existent client: {}", client.id);
                Err(anyhow::anyhow!("Client not found for update"))
            }
        }
    }

    /// Delete a client by ID
    fn delete_client(&self, client_id: &str) -> Result<bool> {
        let mut clients = self.read_clients()?;
        let before = clients.len();
        clients.retain(|c| c.id != client_id);

        if clients.len() == before {
            warn!("Attempted to delete a non-existent client: {}", client_id);
            return Ok(false);
        }

        self.write_clients(&mut clients)?;
        info!("Deleted client: {}", client_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::traits::ClientStorage;
    use tempfile::TempDir;

    fn setup_test_repo() -> (ClientRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = ClientRepository::new(Arc::new(connection));
        (repo, temp_dir)
    }

    fn sample_client(id: &str, company: &str) -> DomainClient {
        let now = chrono::Utc::now();
        DomainClient {
            id: id.to_string(),
            company: company.to_string(),
            address: "Av. Siempre Viva 742".to_string(),
            locality: "Rosario".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_store_and_list_clients() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_client(&sample_client("client::2", "Globex"))
            .expect("Failed to store client");
        repo.store_client(&sample_client("client::1", "Acme S.A."))
            .expect("Failed to store client");

        let clients = repo.list_clients().expect("Failed to list clients");
        assert_eq!(clients.len(), 2);
        // sorted by company, not by insertion order
        assert_eq!(clients[0].company, "Acme S.A.");
        assert_eq!(clients[1].company, "Globex");
    }

    #[test]
    fn test_get_client_by_id() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_client(&sample_client("client::1", "Acme S.A."))
            .expect("Failed to store client");

        let found = repo.get_client("client::1").expect("Failed to get client");
        assert_eq!(found.map(|c| c.company), Some("Acme S.A.".to_string()));

        let missing = repo.get_client("client::999").expect("Failed to get client");
        assert!(missing.is_none());
    }

    #[test]
    fn test_find_by_company_ignores_case() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_client(&sample_client("client::1", "Acme S.A."))
            .expect("Failed to store client");

        let found = repo
            .find_by_company("ACME s.a.")
            .expect("Failed to find client");
        assert!(found.is_some());

        let missing = repo
            .find_by_company("Globex")
            .expect("Failed to find client");
        assert!(missing.is_none());
    }

    #[test]
    fn test_update_client() {
        let (repo, _temp_dir) = setup_test_repo();

        let mut client = sample_client("client::1", "Acme S.A.");
        repo.store_client(&client).expect("Failed to store client");

        client.address = "Calle Falsa 123".to_string();
        repo.update_client(&client).expect("Failed to update client");

        let found = repo.get_client("client::1").expect("Failed to get client");
        assert_eq!(found.unwrap().address, "Calle Falsa 123");

        let ghost = sample_client("client::999", "Ghost");
        assert!(repo.update_client(&ghost).is_err());
    }

    #[test]
    fn test_delete_client() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_client(&sample_client("client::1", "Acme S.A."))
            .expect("Failed to store client");

        assert!(repo.delete_client("client::1").expect("Failed to delete"));
        assert!(!repo.delete_client("client::1").expect("Failed to delete"));
        assert!(repo.list_clients().expect("Failed to list").is_empty());
    }

    #[test]
    fn test_fields_with_separators_round_trip() {
        let (repo, _temp_dir) = setup_test_repo();

        let mut client = sample_client("client::1", "Acme, Hermanos \"El Sol\"");
        client.address = "Ruta 9, km 45".to_string();
        repo.store_client(&client).expect("Failed to store client");

        let found = repo.get_client("client::1").expect("Failed to get client");
        let found = found.unwrap();
        assert_eq!(found.company, "Acme, Hermanos \"El Sol\"");
        assert_eq!(found.address, "Ruta 9, km 45");
    }
}
