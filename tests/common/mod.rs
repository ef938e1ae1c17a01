//! Shared fixtures for the integration tests: stub renderers, app state and
//! hand-built multipart bodies.
#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use actix_web::web;

use hr_ops_server::document::{
    DocumentDefinition, DocumentError, DocumentRenderer, LetterAssets,
};
use hr_ops_server::offer::OfferLetterGenerator;
use hr_ops_server::storage::{LocalDiskStorage, NamingStrategy};
use hr_ops_server::AppState;

pub const STUB_PDF: &[u8] = b"%PDF-1.7\n% stub\n%%EOF";
pub const BOUNDARY: &str = "----hr-ops-test-boundary";

/// Returns a fixed PDF and records the text of every document it was asked to render.
#[derive(Default)]
pub struct StubRenderer {
    pub rendered: Mutex<Vec<Vec<String>>>,
}

impl DocumentRenderer for StubRenderer {
    fn render(&self, document: &DocumentDefinition) -> Result<Vec<u8>, DocumentError> {
        let texts = document.texts().into_iter().map(str::to_string).collect();
        self.rendered.lock().unwrap().push(texts);
        Ok(STUB_PDF.to_vec())
    }
}

/// Fails the way a renderer with a missing font or image would.
pub struct FailingRenderer;

impl DocumentRenderer for FailingRenderer {
    fn render(&self, _document: &DocumentDefinition) -> Result<Vec<u8>, DocumentError> {
        Err(DocumentError::Task("font Roboto-Regular.ttf not found".to_string()))
    }
}

pub fn app_state(upload_dir: &Path, renderer: Arc<dyn DocumentRenderer>) -> web::Data<AppState> {
    let storage = LocalDiskStorage::new(upload_dir, NamingStrategy::Timestamp);
    let generator = OfferLetterGenerator::new(renderer, LetterAssets::from_dir("static"));
    web::Data::new(AppState::new(Arc::new(storage), Arc::new(generator)))
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

/// Encode text fields and an optional `resume` file part.
pub fn multipart_body(fields: &[(&str, &str)], resume: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    if let Some((filename, data)) = resume {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"resume\"; filename=\"{}\"\r\n",
                filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn application_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("firstName", "Jane"),
        ("lastName", "Doe"),
        ("email", "jane@example.com"),
        ("phone", "+91 98765 43210"),
        ("university", "IIT Delhi"),
        ("major", "Computer Science"),
        ("graduationYear", "2026"),
        ("coverLetter", "I would love to join."),
    ]
}
