use std::sync::Arc;

use crate::config::AppConfig;
use crate::document::{DocumentError, FontRegistration, LetterAssets, PdfRenderer};
use crate::offer::OfferLetterGenerator;
use crate::storage::{LocalDiskStorage, UploadStorage};

/// Process-wide services shared read-only by every request.
pub struct AppState {
    pub storage: Arc<dyn UploadStorage>,
    pub offer_generator: Arc<OfferLetterGenerator>,
}

impl AppState {
    pub fn new(storage: Arc<dyn UploadStorage>, offer_generator: Arc<OfferLetterGenerator>) -> Self {
        Self {
            storage,
            offer_generator,
        }
    }

    /// Build the disk storage and the PDF renderer from config. Fails when the fonts are missing.
    pub fn from_config(config: &AppConfig) -> Result<Self, DocumentError> {
        let storage = LocalDiskStorage::new(&config.upload_dir, config.upload_naming);
        let renderer = PdfRenderer::new(&FontRegistration::roboto(&config.font_dir))?;
        let generator =
            OfferLetterGenerator::new(Arc::new(renderer), LetterAssets::from_dir(&config.asset_dir));

        Ok(Self::new(Arc::new(storage), Arc::new(generator)))
    }
}
