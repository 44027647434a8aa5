use serde::{Deserialize, Serialize};

/// Quotation details as the domain layer sees them, after trimming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub company: String,
    pub address: String,
    pub locality: String,
    pub service_type: String,
    /// "Mensual" or a number of months
    pub term: String,
    pub reference: String,
    /// Price exactly as typed, shown verbatim on the document
    pub price: String,
}

impl Quotation {
    /// Build a quotation from raw form input, trimming every field.
    pub fn from_form(form: &shared::QuotationForm) -> Self {
        Self {
            company: form.company.trim().to_string(),
            address: form.address.trim().to_string(),
            locality: form.locality.trim().to_string(),
            service_type: form.service_type.trim().to_string(),
            term: form.term.trim().to_string(),
            reference: form.reference.trim().to_string(),
            price: form.price.trim().to_string(),
        }
    }
}
