use actix_cors::Cors;
use actix_web::middleware::{Compress, Logger};
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod application;
pub mod client;
pub mod config;
pub mod document;
pub mod models;
pub mod offer;
pub mod state;
pub mod storage;
pub mod validation;

pub use crate::config::AppConfig;
pub use crate::state::AppState;

/// Failure payload of both endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    #[schema(example = "Failed to generate offer letter")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            success: false,
            error: message.to_string(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::application::handlers::submit_internship_application,
        crate::offer::handlers::generate_offer_letter,
    ),
    components(schemas(
        models::ReceivedApplication,
        models::OfferLetter,
        application::handlers::InternshipApplicationForm,
        ErrorResponse,
    )),
    tags(
        (name = "Internship Application", description = "Application intake with resume upload."),
        (name = "Offer Letter", description = "Offer letter PDF generation.")
    )
)]
pub struct ApiDoc;

/// Register the `/api` routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(application::config)
            .configure(offer::config),
    );
}

fn cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        return Cors::permissive();
    }

    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::CONTENT_DISPOSITION])
        .max_age(3600)
}

pub async fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let app_state = match AppState::from_config(&config) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!(
                "Failed to initialise the PDF renderer. Check that the Roboto fonts exist in {}. Error: {}",
                config.font_dir.display(),
                e
            );
            return Err(anyhow::anyhow!("PDF renderer initialisation failed: {}", e));
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("hr_ops_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| anyhow::anyhow!("failed to create Prometheus metrics middleware: {}", e))?;

    log::info!(
        "Starting server at http://{}:{} (uploads in {})",
        config.host,
        config.port,
        config.upload_dir.display()
    );

    let origins = config.cors_allowed_origins.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(cors(&origins))
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
