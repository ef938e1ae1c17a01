use actix_web::http::header::{
    Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};
use actix_web::{web, HttpResponse, Responder};
use log::{debug, error, info};

use crate::document::common::ascii_fallback;
use crate::document::GeneratedDocument;
use crate::models::OfferLetter;
use crate::state::AppState;
use crate::ErrorResponse;

pub const OFFER_LETTER_FAILURE: &str = "Failed to generate offer letter";

/// `attachment` disposition with an ASCII `filename` and a UTF-8 `filename*`.
pub fn attachment_disposition(filename: &str) -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![
            DispositionParam::Filename(ascii_fallback(filename)),
            DispositionParam::FilenameExt(ExtendedValue {
                charset: Charset::Ext("UTF-8".to_string()),
                language_tag: None,
                value: filename.as_bytes().to_vec(),
            }),
        ],
    }
}

fn failure() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(OFFER_LETTER_FAILURE))
}

#[utoipa::path(
    context_path = "/api",
    tag = "Offer Letter",
    post,
    path = "/offer-letter",
    request_body = OfferLetter,
    responses(
        (status = 200, description = "Offer letter PDF", content_type = "application/pdf", body = Vec<u8>),
        (status = 500, description = "Offer letter could not be generated", body = ErrorResponse)
    )
)]
pub async fn generate_offer_letter(body: web::Bytes, data: web::Data<AppState>) -> impl Responder {
    info!("Executing generate_offer_letter handler");

    // Malformed bodies get the same generic failure as render errors.
    let offer: OfferLetter = match serde_json::from_slice(&body) {
        Ok(offer) => offer,
        Err(e) => {
            error!("Error generating offer letter: invalid request body: {}", e);
            return failure();
        }
    };

    let generator = data.offer_generator.clone();
    let result = web::block(move || generator.generate(&offer)).await;

    match result {
        Ok(Ok(GeneratedDocument { filename, pdf })) => {
            debug!("Rendered {} ({} bytes)", filename, pdf.len());
            info!("Offer letter generated: {}", filename);
            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header(attachment_disposition(&filename))
                .body(pdf)
        }
        Ok(Err(e)) => {
            error!("Error generating offer letter: {}", e);
            failure()
        }
        Err(e) => {
            error!("Error generating offer letter: render task failed: {}", e);
            failure()
        }
    }
}
