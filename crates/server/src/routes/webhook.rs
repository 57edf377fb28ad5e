use actix_web::{post, web, HttpResponse};
use serde_json::{json, Value};
use std::sync::Arc;
use summarizer_llm::{length_guideline, LengthTier, SummaryOptions};
use tracing::info;

use crate::state::AppState;
use crate::types::{ErrorResponse, WebhookRequest, WebhookResponse};

/// Chat platform webhook: always answers with displayable text once the body is valid
#[post("/webhook")]
pub async fn webhook(
    req: web::Json<WebhookRequest>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let blank = req.blank_fields();
    if !blank.is_empty() {
        let details: serde_json::Map<String, Value> = blank
            .into_iter()
            .map(|field| (field.to_string(), json!(["This field may not be blank."])))
            .collect();
        return Ok(HttpResponse::BadRequest()
            .json(ErrorResponse::with_details("Invalid request data", Value::Object(details))));
    }

    info!(
        "Received summarization request from user {} (conversation {}, channel {})",
        req.user_id,
        req.conversation_id,
        req.channel_id.as_deref().unwrap_or("-")
    );

    if req.is_help_command() {
        return Ok(HttpResponse::Ok().json(WebhookResponse {
            response: help_message(),
            status: "success".to_string(),
            user_id: None,
            conversation_id: None,
        }));
    }

    let options = req
        .options
        .as_ref()
        .map(SummaryOptions::lenient)
        .unwrap_or_default();

    let response = state
        .summarizer
        .process_telex_message(&req.message, &req.user_id, &req.conversation_id, &options)
        .await;

    Ok(HttpResponse::Ok().json(WebhookResponse {
        response,
        status: "success".to_string(),
        user_id: Some(req.user_id.clone()),
        conversation_id: Some(req.conversation_id.clone()),
    }))
}

/// Usage text for the `help` command
pub fn help_message() -> String {
    let lengths = LengthTier::ALL
        .iter()
        .map(|tier| format!("- `{}` - {}", tier.as_str(), length_guideline(*tier)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"**Summarizer Agent Help**

I can summarize various types of content:

**Usage:**
Just send me any text and I'll summarize it automatically!

**Special Formats:**
- `meeting:` - For meeting notes
- `news:` - For news articles
- `tech:` - For technical documents
- `conv:` - For conversations
- `log:` - For system logs

**Summary Lengths:**
{lengths}

**Examples:**

meeting: Today we discussed Q3 goals...
news: Breaking: New AI model released...

**Quick Commands:**
- `help` - Show this message

I'll provide a summary with statistics and key points!"#
    )
}
