use std::sync::Arc;
use summarizer_common::{AppConfig, Result};
use summarizer_llm::{ChatClient, OpenAiClient, SummarizerService, SummarizerSettings};

use crate::history::HistoryManager;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Summary history (also the service's store)
    pub history: Arc<HistoryManager>,

    pub summarizer: SummarizerService,
}

impl AppState {
    /// Create new application state backed by the OpenAI client
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = OpenAiClient::new(&config.openai_base_url, config.openai_api_key.clone())?;
        Self::with_client(config, Arc::new(client))
    }

    /// Create state around an arbitrary chat backend
    pub fn with_client(config: AppConfig, client: Arc<dyn ChatClient>) -> Result<Self> {
        let history = Arc::new(HistoryManager::load(&config.history_path())?);
        let summarizer =
            SummarizerService::new(client, history.clone(), SummarizerSettings::from(&config));

        Ok(Self {
            config,
            history,
            summarizer,
        })
    }
}
