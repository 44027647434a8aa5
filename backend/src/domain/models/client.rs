use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing a saved client company.
///
/// The company name is unique across the client table; address and locality
/// are free text printed on the quotation as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub company: String,
    pub address: String,
    pub locality: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Generate a unique ID for a client
    pub fn generate_id(timestamp_millis: u64) -> String {
        format!("client::{}", timestamp_millis)
    }
}
