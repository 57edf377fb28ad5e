use actix_web::http::StatusCode;
use actix_web::{error, web, HttpResponse};
use summarizer_common::SummarizerError;

use crate::types::ErrorResponse;

pub mod history;
pub mod summarize;
pub mod system;
pub mod webhook;

/// Register every `/api` route plus the JSON body error handler
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .service(webhook::webhook)
            .service(summarize::summarize)
            .service(summarize::quick_summarize)
            .service(system::health_check)
            .service(system::workflow_definition)
            .service(history::get_history)
            .service(history::get_history_record),
    );
}

/// Malformed bodies become `400 {"error": "Invalid request data", "details": ...}`
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::with_details("Invalid request data", err.to_string());
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// Structured error reply using the error's own status code
pub(crate) fn error_response(message: &str, err: &SummarizerError) -> HttpResponse {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(ErrorResponse::with_details(message, err.to_string()))
}
