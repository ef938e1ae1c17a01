//! Document generation - content trees and their PDF rendering.
//!
//! - `types` - the declarative content tree
//! - `offer_letter` - the internship offer letter tree
//! - `renderer` / `layout` - genpdf rendering of a tree

pub mod common;
pub mod layout;
pub mod offer_letter;
pub mod renderer;
pub mod types;

pub use offer_letter::{build_offer_letter, LetterAssets};
pub use renderer::{DocumentRenderer, FontRegistration, PdfRenderer};
pub use types::DocumentDefinition;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to load font {path}: {source}")]
    FontLoad {
        path: PathBuf,
        #[source]
        source: genpdf::error::Error,
    },
    #[error("failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("PDF rendering failed: {0}")]
    Render(#[source] genpdf::error::Error),
    #[error("render task failed: {0}")]
    Task(String),
}

impl DocumentError {
    /// Carry the error through genpdf callbacks, which only accept genpdf errors.
    pub(crate) fn into_genpdf(self) -> genpdf::error::Error {
        genpdf::error::Error::new(self.to_string(), genpdf::error::ErrorKind::Internal)
    }
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
}
