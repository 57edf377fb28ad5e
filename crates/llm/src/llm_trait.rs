use summarizer_common::Result;
use crate::types::ChatRequest;
use async_trait::async_trait;

/// Chat completion backend
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Run one chat completion and return the generated text
    async fn chat(&self, request: ChatRequest) -> Result<String>;
}
