use actix_multipart::Multipart;
use futures::StreamExt;

use crate::models::ReceivedApplication;

/// Name of the multipart part carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub original_filename: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct ParsedApplication {
    /// Text fields as received; `resume` is filled in once the file is stored.
    pub fields: ReceivedApplication,
    pub resume: Option<UploadedFile>,
}

#[derive(Debug, thiserror::Error)]
pub enum MultipartParseError {
    #[error("Multipart field error: {0}")]
    FieldError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Invalid UTF-8 data: {0}")]
    Utf8Error(String),
}

/// Assign a text part to its field; unknown names are ignored.
pub fn assign_text_field(fields: &mut ReceivedApplication, name: &str, value: String) -> bool {
    let slot = match name {
        "firstName" => &mut fields.first_name,
        "lastName" => &mut fields.last_name,
        "email" => &mut fields.email,
        "phone" => &mut fields.phone,
        "university" => &mut fields.university,
        "major" => &mut fields.major,
        "graduationYear" => &mut fields.graduation_year,
        "coverLetter" => &mut fields.cover_letter,
        _ => return false,
    };
    *slot = Some(value);
    true
}

pub struct MultipartParser;

impl MultipartParser {
    pub async fn parse_application_multipart(
        mut multipart: Multipart,
    ) -> Result<ParsedApplication, MultipartParseError> {
        let mut parsed = ParsedApplication::default();

        while let Some(item) = multipart.next().await {
            let mut field = item.map_err(|e| MultipartParseError::FieldError(e.to_string()))?;
            let content_disposition = field
                .content_disposition()
                .ok_or_else(|| MultipartParseError::FieldError("Content disposition not found".to_string()))?;
            let name = content_disposition
                .get_name()
                .ok_or_else(|| MultipartParseError::FieldError("Field name not found".to_string()))?
                .to_string();
            let maybe_filename = content_disposition.get_filename().map(|s| s.to_string());

            let mut buffer = Vec::new();
            while let Some(chunk) = field.next().await {
                let data_chunk = chunk.map_err(|e| MultipartParseError::IoError(e.to_string()))?;
                buffer.extend_from_slice(&data_chunk);
            }

            if name == RESUME_FIELD {
                let original_filename = maybe_filename.unwrap_or_default();
                // A file input left empty still sends a part, with no name and no bytes.
                if original_filename.is_empty() && buffer.is_empty() {
                    continue;
                }
                parsed.resume = Some(UploadedFile {
                    original_filename,
                    data: buffer,
                });
                continue;
            }

            let value = String::from_utf8(buffer)
                .map_err(|e| MultipartParseError::Utf8Error(e.to_string()))?;
            if !assign_text_field(&mut parsed.fields, &name, value) {
                log::debug!("Ignoring unknown multipart field '{}'", name);
            }
        }

        Ok(parsed)
    }
}
