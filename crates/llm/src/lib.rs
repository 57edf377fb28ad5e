//! Summarizer core
//!
//! Text metrics, prompt catalog, OpenAI chat client and the summarization service

mod client;
mod llm_trait;
mod prompts;
mod quick;
mod store;
mod summarize;
mod text;
mod types;
mod validate;

pub use client::OpenAiClient;
pub use llm_trait::ChatClient;
pub use prompts::{length_guideline, prompt_for, prompt_for_tag, PromptTemplate, BULLET_INSTRUCTION};
pub use quick::{create_bullet_summary, extract_first_sentences, DEFAULT_MAX_BULLETS, DEFAULT_SENTENCES};
pub use store::SummaryStore;
pub use summarize::{
    format_reply, reply_for_error, strip_message_prefix, SummarizerService, SummarizerSettings,
};
pub use text::{
    calculate_compression_ratio, clean_text, estimate_reading_time, extract_key_phrases,
    word_count, DEFAULT_MAX_PHRASES, DEFAULT_WORDS_PER_MINUTE,
};
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, LengthTier, Role, SummaryOptions, SummaryRecord,
    SummaryResult, SummaryType,
};
pub use validate::{is_url, validate_text_length, DEFAULT_MIN_WORDS};
