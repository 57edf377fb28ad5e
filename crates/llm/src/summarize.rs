use std::sync::Arc;
use summarizer_common::{AppConfig, Result, SummarizerError};
use tracing::{debug, error, info};

use crate::llm_trait::ChatClient;
use crate::prompts::{prompt_for, BULLET_INSTRUCTION};
use crate::store::SummaryStore;
use crate::text::{
    calculate_compression_ratio, clean_text, estimate_reading_time, extract_key_phrases,
    word_count, DEFAULT_MAX_PHRASES, DEFAULT_WORDS_PER_MINUTE,
};
use crate::types::{ChatMessage, ChatRequest, SummaryOptions, SummaryRecord, SummaryResult};
use crate::validate::{validate_text_length, DEFAULT_MIN_WORDS};

/// Sampling temperature for every summary request
const TEMPERATURE: f32 = 0.3;

/// Chat message prefixes that are stripped before summarizing
const MESSAGE_PREFIXES: &[&str] = &["meeting:", "news:", "tech:", "conv:", "log:"];

/// Key phrases shown in a chat reply
const REPLY_KEY_PHRASES: usize = 3;

const RETRY_REPLY: &str =
    "I apologize, but I'm having trouble generating a summary right now. Please try again.";

/// Service settings taken from `AppConfig` at construction time
#[derive(Debug, Clone)]
pub struct SummarizerSettings {
    pub api_key: Option<String>,
    pub model: String,
}

impl From<&AppConfig> for SummarizerSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            model: config.llm_model.clone(),
        }
    }
}

/// Summarization orchestrator: validate, clean, prompt, call the model, measure, persist
pub struct SummarizerService {
    client: Arc<dyn ChatClient>,
    store: Arc<dyn SummaryStore>,
    settings: SummarizerSettings,
}

impl SummarizerService {
    /// Create new summarizer service
    pub fn new(
        client: Arc<dyn ChatClient>,
        store: Arc<dyn SummaryStore>,
        settings: SummarizerSettings,
    ) -> Self {
        Self { client, store, settings }
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    /// Generate an AI summary with metrics
    pub async fn generate_summary(&self, text: &str, options: &SummaryOptions) -> Result<SummaryResult> {
        self.try_generate_summary(text, options).await.map_err(|e| {
            error!("Error generating summary: {}", e);
            e
        })
    }

    async fn try_generate_summary(&self, text: &str, options: &SummaryOptions) -> Result<SummaryResult> {
        if self.settings.api_key.is_none() {
            return Err(SummarizerError::config("OpenAI API key is not configured."));
        }

        validate_text_length(text, DEFAULT_MIN_WORDS)?;

        let cleaned = clean_text(text);
        let template = prompt_for(options.summary_type);

        let mut user_prompt = template.render_user(&cleaned, options.length);
        if options.include_bullet_points {
            user_prompt.push_str(BULLET_INSTRUCTION);
        }

        info!(
            "Starting summarization - Type: {}, Length: {}, Words: {}",
            options.summary_type.as_str(),
            options.length.as_str(),
            word_count(&cleaned)
        );
        debug!("Requested language: {}", options.language);

        let request = ChatRequest {
            model: self.settings.model.clone(),
            messages: vec![ChatMessage::system(template.system), ChatMessage::user(user_prompt)],
            max_tokens: options.length.max_tokens(),
            temperature: TEMPERATURE,
        };

        let response = self.client.chat(request).await?;
        let summary = response.trim().to_string();

        let result = SummaryResult {
            word_count_original: word_count(&cleaned),
            word_count_summary: word_count(&summary),
            compression_ratio: calculate_compression_ratio(&cleaned, &summary),
            reading_time_original: estimate_reading_time(&cleaned, DEFAULT_WORDS_PER_MINUTE),
            reading_time_summary: estimate_reading_time(&summary, DEFAULT_WORDS_PER_MINUTE),
            key_phrases: extract_key_phrases(&cleaned, DEFAULT_MAX_PHRASES),
            format: options.include_bullet_points.then(|| "bullet_points".to_string()),
            key_points_included: options.include_key_points.then_some(true),
            summary,
        };

        info!(
            "Summary generated - {} -> {} words ({}% reduced)",
            result.word_count_original, result.word_count_summary, result.compression_ratio
        );

        Ok(result)
    }

    /// Summarize a chat message and persist the outcome.
    ///
    /// `Ok` carries the formatted reply; `Err` carries the failure so the caller
    /// can pick the matching user-facing text (see `reply_for_error`).
    pub async fn summarize_message(
        &self,
        message: &str,
        user_id: &str,
        conversation_id: &str,
        options: &SummaryOptions,
    ) -> Result<String> {
        let text = strip_message_prefix(message);

        let result = self.generate_summary(text, options).await?;

        let record = SummaryRecord::new(user_id, conversation_id, text, options, &result);
        let record_id = record.id.clone();
        self.store.save(record).await?;
        debug!("Stored summary record {} for user {}", record_id, user_id);

        Ok(format_reply(&result, options))
    }

    /// Chat entry point: always yields a displayable reply
    pub async fn process_telex_message(
        &self,
        message: &str,
        user_id: &str,
        conversation_id: &str,
        options: &SummaryOptions,
    ) -> String {
        match self.summarize_message(message, user_id, conversation_id, options).await {
            Ok(reply) => reply,
            Err(e) => {
                if !e.is_validation() {
                    error!("Error processing chat message: {}", e);
                }
                reply_for_error(&e)
            }
        }
    }
}

/// Drop a known content prefix such as `meeting:`.
///
/// The prefix does not change the summary type.
pub fn strip_message_prefix(message: &str) -> &str {
    if MESSAGE_PREFIXES.iter().any(|prefix| message.starts_with(prefix)) {
        if let Some((_, rest)) = message.split_once(':') {
            return rest.trim();
        }
    }
    message
}

/// User-facing text for a failed chat summary
pub fn reply_for_error(err: &SummarizerError) -> String {
    match err {
        SummarizerError::Validation(msg) => {
            format!("Sorry! {} Please provide longer text for summarization.", msg)
        }
        _ => RETRY_REPLY.to_string(),
    }
}

/// Chat reply: header, summary body, statistics and top key phrases
pub fn format_reply(result: &SummaryResult, options: &SummaryOptions) -> String {
    let key_phrases = result
        .key_phrases
        .iter()
        .take(REPLY_KEY_PHRASES)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    let reply = format!(
        "**{label}** ({length})\n\n\
         {summary}\n\n\
         ---\n\
         *Statistics:*\n\
         • Original: {original} words\n\
         • Summary: {summary_words} words\n\
         • Compression: {ratio}% reduced\n\
         • Reading time saved: {saved} minutes\n\n\
         *Key phrases:* {key_phrases}",
        label = options.summary_type.display_label(),
        length = options.length.as_str(),
        summary = result.summary,
        original = result.word_count_original,
        summary_words = result.word_count_summary,
        ratio = format_ratio(result.compression_ratio),
        saved = result.reading_time_saved(),
        key_phrases = key_phrases,
    );

    reply.trim().to_string()
}

/// Shortest form of the ratio, keeping one decimal on whole numbers (`50.0`, `66.67`)
fn format_ratio(ratio: f64) -> String {
    if ratio.fract() == 0.0 {
        format!("{ratio:.1}")
    } else {
        ratio.to_string()
    }
}
