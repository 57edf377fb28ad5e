use async_trait::async_trait;
use reqwest::Client;
use summarizer_common::{Result, SummarizerError};
use tracing::{debug, info};

use crate::llm_trait::ChatClient;
use crate::types::{ChatRequest, ChatResponse};

/// OpenAI-compatible chat completion client
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl OpenAiClient {
    /// Create new client; a missing key is reported on the first call, not here
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .build()
            .map_err(|e| SummarizerError::internal(format!("Failed to create HTTP client: {}", e)))?;

        info!("OpenAI client initialized: {}", base_url);
        Ok(Self { base_url, api_key, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Single chat completion call, no retry
    pub async fn complete(&self, request: &ChatRequest) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SummarizerError::config("OpenAI API key is not configured."))?;

        debug!(
            "Sending chat completion - Model: {}, Messages: {}, Max tokens: {}",
            request.model,
            request.messages.len(),
            request.max_tokens
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| SummarizerError::network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizerError::llm(format!("OpenAI API error {}: {}", status, body)));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::llm(format!("Failed to parse response: {}", e)))?;

        let content = result
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| SummarizerError::llm("Empty response from OpenAI"))?;

        debug!("Received chat completion - Length: {}", content.len());
        Ok(content)
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn chat(&self, request: ChatRequest) -> Result<String> {
        self.complete(&request).await
    }
}
