//! Conversions between backend domain models and shared DTOs.

use quotation_desk_backend::domain::models::client::Client as DomainClient;
use shared::Client;

pub fn to_client_dto(client: &DomainClient) -> Client {
    Client {
        id: client.id.clone(),
        company: client.company.clone(),
        address: client.address.clone(),
        locality: client.locality.clone(),
        created_at: client.created_at.to_rfc3339(),
        updated_at: client.updated_at.to_rfc3339(),
    }
}
