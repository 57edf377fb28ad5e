use actix_web::{post, web, HttpResponse};
use serde_json::Value;
use std::sync::Arc;
use summarizer_llm::{create_bullet_summary, SummaryOptions, DEFAULT_MAX_BULLETS};
use tracing::info;

use crate::routes::error_response;
use crate::state::AppState;
use crate::types::{
    ErrorResponse, QuickSummarizeRequest, QuickSummarizeResponse, SummarizeRequest,
    SummarizeResponse,
};

/// AI summary with explicit options
#[post("/summarize")]
pub async fn summarize(
    req: web::Json<SummarizeRequest>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    if req.text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("No text provided")));
    }

    let options = match &req.options {
        None | Some(Value::Null) => SummaryOptions::default(),
        Some(raw) => match serde_json::from_value::<SummaryOptions>(raw.clone()) {
            Ok(options) => options,
            Err(e) => {
                return Ok(HttpResponse::BadRequest()
                    .json(ErrorResponse::with_details("Invalid options", e.to_string())));
            }
        },
    };

    match state.summarizer.generate_summary(&req.text, &options).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(SummarizeResponse {
            summary,
            status: "success".to_string(),
        })),
        Err(e) => Ok(error_response("Error generating summary", &e)),
    }
}

/// Bullet summary without calling the model
#[post("/quick-summarize")]
pub async fn quick_summarize(req: web::Json<QuickSummarizeRequest>) -> actix_web::Result<HttpResponse> {
    if req.text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("No text provided")));
    }

    let max_bullets = req.max_bullets.unwrap_or(DEFAULT_MAX_BULLETS);
    info!("Quick summary requested - {} chars, {} bullets", req.text.len(), max_bullets);

    Ok(HttpResponse::Ok().json(QuickSummarizeResponse {
        summary: create_bullet_summary(&req.text, max_bullets),
        status: "success".to_string(),
    }))
}
