use serde::{Deserialize, Serialize};

/// Client record as exchanged with the UI.
///
/// Client ID format: "client::<epoch_millis>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    /// Company name, unique across the client table
    pub company: String,
    /// Street address as printed on the quotation
    pub address: String,
    pub locality: String,
    /// Human-readable timestamp with timezone (RFC 3339)
    pub created_at: String,
    pub updated_at: String,
}

/// The quotation form as filled in by the user.
///
/// All fields are free text; the price keeps the exact string the user typed
/// ("1.500.000,00") so the document shows it verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuotationForm {
    pub company: String,
    pub address: String,
    pub locality: String,
    /// Kind of service being quoted
    pub service_type: String,
    /// Payment term: "Mensual" or a number of months
    pub term: String,
    pub reference: String,
    /// Price with `.` thousands separators and `,` decimal separator
    pub price: String,
}

/// Request to fill a quotation template and write the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateDocumentRequest {
    pub form: QuotationForm,
    /// Path of the plain-text template containing `{placeholder}` markers
    pub template_path: String,
    /// Full output path; when None a filename is generated under Documents
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateDocumentResponse {
    pub success: bool,
    pub message: String,
    /// Path the document was written to (empty on failure)
    pub file_path: String,
}
