use serde::{Deserialize, Serialize};
use serde_json::Value;
use summarizer_llm::SummaryResult;

/// Chat platform webhook payload
#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    pub message: String,
    pub user_id: String,
    pub conversation_id: String,

    #[serde(default)]
    pub channel_id: Option<String>,

    /// Loosely shaped options; see `SummaryOptions::lenient`
    #[serde(default)]
    pub options: Option<Value>,
}

impl WebhookRequest {
    /// Names of required fields that are blank
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("message", &self.message),
            ("user_id", &self.user_id),
            ("conversation_id", &self.conversation_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_help_command(&self) -> bool {
        matches!(self.message.trim().to_lowercase().as_str(), "help" | "/help")
    }
}

/// Webhook reply
#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub response: String,
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// Direct summarization request
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: String,

    /// Validated strictly against `SummaryOptions`
    #[serde(default)]
    pub options: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: SummaryResult,
    pub status: String,
}

/// Non-AI summarization request
#[derive(Debug, Deserialize)]
pub struct QuickSummarizeRequest {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub max_bullets: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuickSummarizeResponse {
    pub summary: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), details: None }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<Value>) -> Self {
        Self { error: error.into(), details: Some(details.into()) }
    }
}
