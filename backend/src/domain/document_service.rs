//! Document generation domain logic.
//!
//! Fills a plain-text quotation template with the form values, spelling the
//! price out in words, and writes the result to disk. Orchestration lives
//! here so the UI only handles presentation concerns: it hands over the form
//! plus a template path and receives a response it can show verbatim.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use log::{error, info};
use std::fs;
use std::path::PathBuf;

use crate::domain::amount_words::Amount;
use crate::domain::models::quotation::Quotation;
use shared::{GenerateDocumentRequest, GenerateDocumentResponse};

/// Month names for the `{fecha}` placeholder.
const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Service that fills quotation templates and writes the documents.
#[derive(Clone)]
pub struct DocumentService {
    // No internal state needed for now
}

impl DocumentService {
    /// Create a new DocumentService instance
    pub fn new() -> Self {
        Self {}
    }

    /// Fill the template and write the quotation document.
    ///
    /// Validation failures and I/O problems are reported through the
    /// response's success flag so the UI can display them inline; only a
    /// failure to resolve any output location at all is an error.
    pub fn generate(&self, request: GenerateDocumentRequest) -> Result<GenerateDocumentResponse> {
        let quotation = Quotation::from_form(&request.form);
        info!("📄 DOCUMENT: Generating quotation for company: {}", quotation.company);

        // A quotation needs at least the company, the reference and the price.
        if quotation.company.is_empty()
            || quotation.reference.is_empty()
            || quotation.price.is_empty()
        {
            return Ok(failure(
                "Debe ingresar al menos la compañía, referencia y precio.",
            ));
        }

        let price_text = match Amount::parse(&quotation.price) {
            Ok(amount) => amount.in_words(),
            Err(_) => {
                error!("❌ DOCUMENT: Price is not a valid amount: {}", quotation.price);
                return Ok(failure("El precio ingresado no es un número válido."));
            }
        };

        let template = match fs::read_to_string(&request.template_path) {
            Ok(content) => content,
            Err(e) => {
                error!(
                    "❌ DOCUMENT: Failed to read template {}: {}",
                    request.template_path, e
                );
                return Ok(failure(&format!(
                    "No se pudo leer la plantilla: {}",
                    e
                )));
            }
        };

        let today = Local::now().date_naive();
        let content = self.fill_template(&template, &quotation, &price_text, today);

        let file_path = match self.resolve_output_path(&request, &quotation) {
            Some(path) => path,
            None => {
                error!("❌ DOCUMENT: Could not determine an output directory");
                return Ok(failure("No se pudo determinar la carpeta de destino."));
            }
        };

        if let Some(parent_dir) = file_path.parent() {
            if let Err(e) = fs::create_dir_all(parent_dir) {
                error!(
                    "❌ DOCUMENT: Failed to create output directory {:?}: {}",
                    parent_dir, e
                );
                return Ok(failure(&format!(
                    "No se pudo crear la carpeta de destino: {}",
                    e
                )));
            }
        }

        // Atomic write using temp file
        let temp_path = file_path.with_extension("tmp");
        if let Err(e) = fs::write(&temp_path, &content).and_then(|_| fs::rename(&temp_path, &file_path)) {
            error!("❌ DOCUMENT: Failed to write document {:?}: {}", file_path, e);
            return Ok(failure(&format!("No se pudo escribir el documento: {}", e)));
        }

        let file_path_str = file_path.to_string_lossy().to_string();
        info!(
            "✅ DOCUMENT: Generated quotation for {} at: {}",
            quotation.company, file_path_str
        );

        Ok(GenerateDocumentResponse {
            success: true,
            message: "Documento generado correctamente.".to_string(),
            file_path: file_path_str,
        })
    }

    /// Replace every `{placeholder}` occurrence with its form value.
    pub fn fill_template(
        &self,
        template: &str,
        quotation: &Quotation,
        price_text: &str,
        date: NaiveDate,
    ) -> String {
        template
            .replace("{fecha}", &self.long_date(date))
            .replace("{compania}", &quotation.company)
            .replace("{domicilio}", &quotation.address)
            .replace("{localidad}", &quotation.locality)
            .replace("{tipo_servicio}", &quotation.service_type)
            .replace("{plazo}", &quotation.term)
            .replace("{referencia}", &quotation.reference)
            .replace("{precio}", &quotation.price)
            .replace("{precio_en_letras}", price_text)
    }

    /// Long-form date for the document header: "7 de agosto de 2026".
    pub fn long_date(&self, date: NaiveDate) -> String {
        format!(
            "{} de {} de {}",
            date.day(),
            MONTHS[date.month0() as usize],
            date.year()
        )
    }

    /// Choose where the document lands: the explicit path when one was given,
    /// otherwise a generated filename under Documents (falling back to home).
    fn resolve_output_path(
        &self,
        request: &GenerateDocumentRequest,
        quotation: &Quotation,
    ) -> Option<PathBuf> {
        match request.output_path.as_deref() {
            Some(path) if !path.trim().is_empty() => {
                Some(PathBuf::from(self.sanitize_path(path)))
            }
            _ => {
                let output_dir = dirs::document_dir().or_else(dirs::home_dir)?;
                let filename = format!(
                    "presupuesto_{}_{}.txt",
                    Self::safe_file_stem(&quotation.company),
                    Local::now().format("%Y%m%d")
                );
                Some(output_dir.join(filename))
            }
        }
    }

    /// Generate a safe filename fragment from a company name.
    /// Converts "Acme S.A." -> "acme_s_a", "Niño & Cía" -> "nino_cia", etc.
    pub fn safe_file_stem(company: &str) -> String {
        let mapped = company
            .chars()
            .map(|c| {
                if c.is_whitespace() {
                    '_'
                } else {
                    match c {
                        'á' | 'à' | 'ä' | 'â' | 'Á' | 'À' | 'Ä' | 'Â' => 'a',
                        'é' | 'è' | 'ë' | 'ê' | 'É' | 'È' | 'Ë' | 'Ê' => 'e',
                        'í' | 'ì' | 'ï' | 'î' | 'Í' | 'Ì' | 'Ï' | 'Î' => 'i',
                        'ó' | 'ò' | 'ö' | 'ô' | 'Ó' | 'Ò' | 'Ö' | 'Ô' => 'o',
                        'ú' | 'ù' | 'ü' | 'û' | 'Ú' | 'Ù' | 'Ü' | 'Û' => 'u',
                        'ñ' | 'Ñ' => 'n',
                        'ç' | 'Ç' => 'c',
                        c if c.is_ascii_alphanumeric() => c.to_ascii_lowercase(),
                        _ => '_',
                    }
                }
            })
            .collect::<String>();

        // Collapse consecutive underscores into single underscores
        let mut collapsed = String::new();
        let mut last_was_underscore = false;
        for c in mapped.chars() {
            if c == '_' {
                if !last_was_underscore {
                    collapsed.push('_');
                }
                last_was_underscore = true;
            } else {
                collapsed.push(c);
                last_was_underscore = false;
            }
        }

        collapsed.trim_matches('_').to_string()
    }

    /// Basic path sanitization to handle common user input issues
    fn sanitize_path(&self, path: &str) -> String {
        let mut cleaned = path.trim().to_string();

        // Remove surrounding quotes (single or double)
        if (cleaned.starts_with('"') && cleaned.ends_with('"'))
            || (cleaned.starts_with('\'') && cleaned.ends_with('\''))
        {
            cleaned = cleaned[1..cleaned.len() - 1].to_string();
        }

        cleaned = cleaned.trim().to_string();
        cleaned = cleaned.replace("\\ ", " ");

        while cleaned.ends_with('/') || cleaned.ends_with('\\') {
            cleaned.pop();
        }

        // Handle tilde expansion for home directory
        if cleaned.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                if cleaned == "~" {
                    cleaned = home.to_string_lossy().to_string();
                } else if cleaned.starts_with("~/") || cleaned.starts_with("~\\") {
                    cleaned = home.join(&cleaned[2..]).to_string_lossy().to_string();
                }
            }
        }

        cleaned
    }
}

impl Default for DocumentService {
    fn default() -> Self {
        Self::new()
    }
}

fn failure(message: &str) -> GenerateDocumentResponse {
    GenerateDocumentResponse {
        success: false,
        message: message.to_string(),
        file_path: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::QuotationForm;
    use tempfile::TempDir;

    const TEMPLATE: &str = "\
{localidad}, {fecha}

Señores {compania}
{domicilio}

Ref.: {referencia}

Por el servicio de {tipo_servicio} ({plazo}) cotizamos $ {precio}.
{precio_en_letras}.
";

    fn sample_form() -> QuotationForm {
        QuotationForm {
            company: "Acme S.A.".to_string(),
            address: "Av. Siempre Viva 742".to_string(),
            locality: "Rosario".to_string(),
            service_type: "Mantenimiento".to_string(),
            term: "Mensual".to_string(),
            reference: "Presupuesto 2026-014".to_string(),
            price: "1.500.000,00".to_string(),
        }
    }

    fn request_into(temp_dir: &TempDir, form: QuotationForm) -> GenerateDocumentRequest {
        let template_path = temp_dir.path().join("plantilla.txt");
        fs::write(&template_path, TEMPLATE).unwrap();
        GenerateDocumentRequest {
            form,
            template_path: template_path.to_string_lossy().to_string(),
            output_path: Some(
                temp_dir
                    .path()
                    .join("presupuesto.txt")
                    .to_string_lossy()
                    .to_string(),
            ),
        }
    }

    #[test]
    fn test_generate_fills_every_placeholder() {
        let temp_dir = TempDir::new().unwrap();
        let service = DocumentService::new();

        let response = service
            .generate(request_into(&temp_dir, sample_form()))
            .expect("generate should not error");
        assert!(response.success, "message: {}", response.message);

        let written = fs::read_to_string(&response.file_path).unwrap();
        assert!(written.contains("Señores Acme S.A."));
        assert!(written.contains("Av. Siempre Viva 742"));
        assert!(written.contains("Rosario, "));
        assert!(written.contains("Mantenimiento (Mensual)"));
        assert!(written.contains("Ref.: Presupuesto 2026-014"));
        assert!(written.contains("$ 1.500.000,00"));
        assert!(written.contains("Son pesos un millón quinientos mil con 00/100"));
        assert!(!written.contains('{'), "unreplaced placeholder: {}", written);
    }

    #[test]
    fn test_generate_requires_company_reference_and_price() {
        let temp_dir = TempDir::new().unwrap();
        let service = DocumentService::new();

        for strip in ["company", "reference", "price"] {
            let mut form = sample_form();
            match strip {
                "company" => form.company.clear(),
                "reference" => form.reference.clear(),
                _ => form.price.clear(),
            }
            let response = service
                .generate(request_into(&temp_dir, form))
                .expect("generate should not error");
            assert!(!response.success, "missing {} should be rejected", strip);
            assert!(response.file_path.is_empty());
        }
    }

    #[test]
    fn test_generate_rejects_unparseable_price() {
        let temp_dir = TempDir::new().unwrap();
        let service = DocumentService::new();

        let mut form = sample_form();
        form.price = "abc".to_string();
        let response = service
            .generate(request_into(&temp_dir, form))
            .expect("generate should not error");
        assert!(!response.success);
    }

    #[test]
    fn test_generate_reports_missing_template() {
        let temp_dir = TempDir::new().unwrap();
        let service = DocumentService::new();

        let mut request = request_into(&temp_dir, sample_form());
        request.template_path = temp_dir
            .path()
            .join("no_existe.txt")
            .to_string_lossy()
            .to_string();
        let response = service.generate(request).expect("generate should not error");
        assert!(!response.success);
        assert!(response.message.contains("plantilla"));
    }

    #[test]
    fn test_long_date() {
        let service = DocumentService::new();
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(service.long_date(date), "7 de agosto de 2026");
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(service.long_date(date), "31 de diciembre de 2025");
    }

    #[test]
    fn test_safe_file_stem() {
        assert_eq!(DocumentService::safe_file_stem("Acme S.A."), "acme_s_a");
        assert_eq!(DocumentService::safe_file_stem("Niño & Cía"), "nino_cia");
        assert_eq!(DocumentService::safe_file_stem("  Globex  "), "globex");
    }

    #[test]
    fn test_sanitize_path() {
        let service = DocumentService::new();
        assert_eq!(service.sanitize_path("  /tmp/salida  "), "/tmp/salida");
        assert_eq!(service.sanitize_path("\"/tmp/salida\""), "/tmp/salida");
        assert_eq!(service.sanitize_path("/tmp/salida/"), "/tmp/salida");
        assert_eq!(service.sanitize_path("/tmp/con\\ espacio"), "/tmp/con espacio");
    }
}
