use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use utoipa::ToSchema;

/// File extensions the resume picker accepts.
pub const ACCEPTED_RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Response envelope shared by both endpoints and the transport client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// A resume picked on the client, held in memory until it is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ResumeFileError {
    #[error("unsupported resume type '{0}', expected pdf, doc or docx")]
    UnsupportedType(String),
    #[error("failed to read resume: {0}")]
    Io(#[from] std::io::Error),
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Load a resume from disk, applying the same type filter as the file picker.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ResumeFileError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if !ACCEPTED_RESUME_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ResumeFileError::UnsupportedType(extension));
        }

        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("resume")
            .to_string();

        Ok(Self::new(file_name, bytes))
    }
}

/// Values of the internship application form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternshipApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub university: String,
    pub major: String,
    pub graduation_year: String,
    pub resume: Option<ResumeFile>,
    pub cover_letter: String,
}

impl InternshipApplication {
    /// Text fields in the order they are sent, keyed by their wire name.
    pub fn text_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("university", self.university.as_str()),
            ("major", self.major.as_str()),
            ("graduationYear", self.graduation_year.as_str()),
            ("coverLetter", self.cover_letter.as_str()),
        ]
    }
}

/// Echo of a received application. Text fields the client left out stay absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedApplication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "2026")]
    pub graduation_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    /// Stored filename of the uploaded resume, `null` when none was sent.
    #[schema(example = "1718000000000-resume.pdf")]
    pub resume: Option<String>,
}

/// Offer letter request, shared by the form and the PDF endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct OfferLetter {
    #[serde(deserialize_with = "lenient_string")]
    #[schema(example = "Jane Doe")]
    pub candidate_name: String,
    #[serde(deserialize_with = "lenient_string")]
    #[schema(example = "Backend Engineer")]
    pub position: String,
    #[serde(deserialize_with = "lenient_string")]
    #[schema(example = "2025-05-10")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub salary: String,
    #[serde(deserialize_with = "lenient_string")]
    pub department: String,
    #[serde(deserialize_with = "lenient_string")]
    pub reporting_manager: String,
    #[serde(deserialize_with = "lenient_string")]
    pub terms: String,
}

/// Accept any JSON value for a text field. `null`, arrays and objects read as
/// empty; numbers and booleans keep their JSON spelling.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}
