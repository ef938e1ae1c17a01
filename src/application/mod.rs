//! Internship application intake: multipart parsing and resume storage.

pub mod handlers;
pub mod multipart_parser;

pub use multipart_parser::RESUME_FIELD;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/internship-application")
            .route(web::post().to(handlers::submit_internship_application)),
    );
}
