//! Generator for the internship offer letter PDF.

use std::sync::Arc;

use crate::document::common::offer_letter_filename;
use crate::document::{
    build_offer_letter, DocumentError, DocumentRenderer, GeneratedDocument, LetterAssets,
};
use crate::models::OfferLetter;

pub struct OfferLetterGenerator {
    renderer: Arc<dyn DocumentRenderer>,
    assets: LetterAssets,
}

impl OfferLetterGenerator {
    pub fn new(renderer: Arc<dyn DocumentRenderer>, assets: LetterAssets) -> Self {
        Self { renderer, assets }
    }

    /// Build and render the letter. The download name uses the submitted name as-is
    /// (sanitized), without the placeholder printed inside the letter.
    pub fn generate(&self, offer: &OfferLetter) -> Result<GeneratedDocument, DocumentError> {
        let definition = build_offer_letter(offer, &self.assets);
        let pdf = self.renderer.render(&definition)?;

        Ok(GeneratedDocument {
            filename: offer_letter_filename(&offer.candidate_name),
            pdf,
        })
    }
}
