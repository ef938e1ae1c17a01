//! Offer letter generation endpoint.

pub mod generator;
pub mod handlers;

pub use generator::OfferLetterGenerator;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/offer-letter").route(web::post().to(handlers::generate_offer_letter)),
    );
}
