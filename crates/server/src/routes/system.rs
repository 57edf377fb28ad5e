use actix_web::{get, web, HttpResponse};
use serde_json::json;
use std::sync::Arc;
use summarizer_llm::SummaryType;

use crate::state::AppState;

/// Health check with the supported content types
#[get("/health")]
pub async fn health_check(state: web::Data<Arc<AppState>>) -> actix_web::Result<HttpResponse> {
    let capabilities: Vec<&str> = SummaryType::ALL.iter().map(|t| t.as_str()).collect();

    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "Summarizer Agent",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.summarizer.model(),
        "ai_enabled": state.config.has_api_key(),
        "capabilities": capabilities,
    })))
}

/// Workflow descriptor consumed by the chat platform
#[get("/workflow")]
pub async fn workflow_definition(state: web::Data<Arc<AppState>>) -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "active": true,
        "category": "productivity",
        "description": "An AI agent that summarizes long texts, meeting notes, news articles, and system logs",
        "id": "summarizer_agent_001",
        "long_description": LONG_DESCRIPTION,
        "name": "summarizer_agent",
        "nodes": [
            {
                "id": "summarizer_agent",
                "name": "Summarizer Agent",
                "parameters": {},
                "position": [600, 150],
                "type": "a2a/summarizer-node",
                "typeVersion": 1,
                "url": state.config.public_url,
            }
        ],
        "pinData": {},
        "settings": {
            "executionOrder": "v1"
        },
        "short_description": "AI-powered text summarization for various content types",
    })))
}

const LONG_DESCRIPTION: &str = r#"You are an intelligent summarization assistant that can process and condense various types of content into concise, informative summaries.

Supported content types:
- General texts and documents
- Meeting notes and transcripts
- News articles and reports
- Technical documentation
- Conversation threads
- System logs and API responses

When processing content:
- Identify the main points and key information
- Remove redundant and irrelevant details
- Preserve important facts, figures, and context
- Adapt summary length based on user needs
- Provide statistics about the summarization

You automatically detect content type or can be guided by user commands."#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::configure;
    use crate::routes::test_support::{state_with, FakeChat};
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_lists_capabilities() {
        let (state, _tmp) = state_with(FakeChat::replying("unused"), None);
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["ai_enabled"], false);
        assert_eq!(
            body["capabilities"],
            json!(["general", "meeting", "news", "technical", "conversation", "log"])
        );
    }

    #[actix_web::test]
    async fn test_workflow_advertises_public_url() {
        let (state, _tmp) = state_with(FakeChat::replying("unused"), None);
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/workflow").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["id"], "summarizer_agent_001");
        assert_eq!(body["nodes"][0]["url"], "https://summarizer.example.com/api/webhook");
        assert_eq!(body["settings"]["executionOrder"], "v1");
    }
}
