use std::path::{Path, PathBuf};

use actix_web::http::header::{ContentDisposition, HeaderValue};
use log::{debug, info};
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};

use crate::application::RESUME_FIELD;
use crate::client::UNEXPECTED_ERROR_MESSAGE;
use crate::document::common::{offer_letter_filename, sanitize_download_name};
use crate::models::{ApiResponse, InternshipApplication, OfferLetter, ReceivedApplication};

/// Every transport failure reads as the same generic message; the cause is kept as source.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{}", UNEXPECTED_ERROR_MESSAGE)]
    Request(#[from] reqwest::Error),
    #[error("{}", UNEXPECTED_ERROR_MESSAGE)]
    Io(#[from] std::io::Error),
}

/// A downloaded offer letter.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPdf {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl GeneratedPdf {
    /// Write the PDF into `dir` under its suggested filename, creating `dir` if needed.
    pub async fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ClientError> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;

        let mut name = sanitize_download_name(&self.filename);
        if name.is_empty() {
            name = offer_letter_filename("");
        }
        let path = dir.join(name);
        tokio::fs::write(&path, &self.bytes).await?;

        info!("Saved offer letter to {}", path.display());
        Ok(path)
    }
}

/// Result of an offer letter request: either the PDF or the server's JSON envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum OfferLetterOutcome {
    Pdf(GeneratedPdf),
    Response(ApiResponse<serde_json::Value>),
}

impl OfferLetterOutcome {
    pub fn is_success(&self) -> bool {
        match self {
            OfferLetterOutcome::Pdf(_) => true,
            OfferLetterOutcome::Response(response) => response.success,
        }
    }

    pub fn pdf(&self) -> Option<&GeneratedPdf> {
        match self {
            OfferLetterOutcome::Pdf(pdf) => Some(pdf),
            OfferLetterOutcome::Response(_) => None,
        }
    }
}

/// Filename announced by a `Content-Disposition` header, preferring `filename*`.
pub fn disposition_filename(raw: &[u8]) -> Option<String> {
    let value = HeaderValue::from_bytes(raw).ok()?;
    let disposition = ContentDisposition::from_raw(&value).ok()?;

    if let Some(ext) = disposition.get_filename_ext() {
        if let Ok(name) = String::from_utf8(ext.value.clone()) {
            return Some(name);
        }
    }
    disposition.get_filename().map(str::to_string)
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn application_form(application: &InternshipApplication) -> Result<Form, ClientError> {
        let mut form = application
            .text_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value.to_string()));

        if let Some(resume) = &application.resume {
            let part = Part::bytes(resume.bytes.clone())
                .file_name(resume.file_name.clone())
                .mime_str(&resume.content_type)?;
            form = form.part(RESUME_FIELD, part);
        }
        Ok(form)
    }

    /// POST the application as `multipart/form-data`. Non-2xx replies still carry the envelope.
    pub async fn submit_internship_application(
        &self,
        application: &InternshipApplication,
    ) -> Result<ApiResponse<ReceivedApplication>, ClientError> {
        let form = Self::application_form(application)?;

        let response = self
            .http
            .post(self.url("/internship-application"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                debug!("Internship application request failed: {}", e);
                ClientError::from(e)
            })?;

        debug!("Internship application answered with {}", response.status());
        response.json().await.map_err(|e| {
            debug!("Internship application response was not an envelope: {}", e);
            ClientError::from(e)
        })
    }

    /// POST the offer as JSON and return the PDF, or the envelope when the server refuses.
    pub async fn generate_offer_letter(
        &self,
        offer: &OfferLetter,
    ) -> Result<OfferLetterOutcome, ClientError> {
        let response = self
            .http
            .post(self.url("/offer-letter"))
            .json(offer)
            .send()
            .await
            .map_err(|e| {
                debug!("Offer letter request failed: {}", e);
                ClientError::from(e)
            })?;

        let status = response.status();
        let is_pdf = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("application/pdf"))
            .unwrap_or(false);

        if status.is_success() && is_pdf {
            let filename = response
                .headers()
                .get(CONTENT_DISPOSITION)
                .and_then(|value| disposition_filename(value.as_bytes()))
                .unwrap_or_else(|| offer_letter_filename(&offer.candidate_name));
            let bytes = response.bytes().await?.to_vec();
            debug!("Received {} ({} bytes)", filename, bytes.len());
            return Ok(OfferLetterOutcome::Pdf(GeneratedPdf { filename, bytes }));
        }

        debug!("Offer letter answered with {}", status);
        let envelope = response.json().await.map_err(|e| {
            debug!("Offer letter response was not an envelope: {}", e);
            ClientError::from(e)
        })?;
        Ok(OfferLetterOutcome::Response(envelope))
    }
}
