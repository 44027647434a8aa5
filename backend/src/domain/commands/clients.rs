use crate::domain::models::client::Client;

/// Command to create a new client record.
#[derive(Debug, Clone)]
pub struct CreateClientCommand {
    pub company: String,
    pub address: String,
    pub locality: String,
}

#[derive(Debug, Clone)]
pub struct CreateClientResult {
    pub client: Client,
}

/// Command to update an existing client; None fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateClientCommand {
    pub client_id: String,
    pub company: Option<String>,
    pub address: Option<String>,
    pub locality: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateClientResult {
    pub client: Client,
}

#[derive(Debug, Clone)]
pub struct GetClientCommand {
    pub client_id: String,
}

#[derive(Debug, Clone)]
pub struct GetClientResult {
    pub client: Option<Client>,
}

#[derive(Debug, Clone)]
pub struct ListClientsResult {
    pub clients: Vec<Client>,
}

#[derive(Debug, Clone)]
pub struct DeleteClientCommand {
    pub client_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteClientResult {
    pub success_message: String,
}
