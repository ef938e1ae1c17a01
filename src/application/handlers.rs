use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use log::{debug, error, info};
use utoipa::ToSchema;

use super::multipart_parser::MultipartParser;
use crate::models::{ApiResponse, ReceivedApplication};
use crate::state::AppState;
use crate::ErrorResponse;

pub const APPLICATION_FAILURE: &str = "Failed to process internship application";

/// Multipart body of an internship application (documentation only).
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct InternshipApplicationForm {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    university: String,
    major: String,
    graduation_year: String,
    cover_letter: String,
    #[schema(value_type = String, format = Binary)]
    resume: Vec<u8>,
}

async fn process_application(
    payload: Multipart,
    data: &AppState,
) -> Result<ReceivedApplication, String> {
    let parsed = MultipartParser::parse_application_multipart(payload)
        .await
        .map_err(|e| e.to_string())?;

    let mut received = parsed.fields;
    if let Some(resume) = parsed.resume {
        debug!(
            "Storing resume '{}' ({} bytes)",
            resume.original_filename,
            resume.data.len()
        );
        let stored = data
            .storage
            .store(&resume.original_filename, &resume.data)
            .await
            .map_err(|e| e.to_string())?;
        received.resume = Some(stored);
    }

    Ok(received)
}

#[utoipa::path(
    context_path = "/api",
    tag = "Internship Application",
    post,
    path = "/internship-application",
    request_body(content = inline(InternshipApplicationForm), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Application received", body = ReceivedApplication),
        (status = 500, description = "Application could not be processed", body = ErrorResponse)
    )
)]
pub async fn submit_internship_application(
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    info!("Executing submit_internship_application handler");
    match process_application(payload, &data).await {
        Ok(received) => {
            info!(
                "Internship application received (resume: {})",
                received.resume.as_deref().unwrap_or("none")
            );
            HttpResponse::Ok().json(ApiResponse::success(received))
        }
        Err(e) => {
            error!("Failed to process internship application: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(APPLICATION_FAILURE))
        }
    }
}
