use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content type tag selecting the prompt template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryType {
    #[default]
    General,
    Meeting,
    News,
    Technical,
    Conversation,
    Log,
}

impl SummaryType {
    pub const ALL: [SummaryType; 6] = [
        SummaryType::General,
        SummaryType::Meeting,
        SummaryType::News,
        SummaryType::Technical,
        SummaryType::Conversation,
        SummaryType::Log,
    ];

    /// Resolve a tag, falling back to `General` for anything unknown
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Meeting => "meeting",
            Self::News => "news",
            Self::Technical => "technical",
            Self::Conversation => "conversation",
            Self::Log => "log",
        }
    }

    /// Human-readable label used in chat replies
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::General => "General Summary",
            Self::Meeting => "Meeting Notes",
            Self::News => "News Article",
            Self::Technical => "Technical Document",
            Self::Conversation => "Conversation Thread",
            Self::Log => "API/System Logs",
        }
    }
}

/// Requested summary size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthTier {
    pub const ALL: [LengthTier; 3] = [LengthTier::Short, LengthTier::Medium, LengthTier::Long];

    /// Resolve a tag, falling back to `Medium` for anything unknown
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Output token budget for the chat completion
    pub fn max_tokens(&self) -> u32 {
        match self {
            Self::Short => 500,
            Self::Medium => 800,
            Self::Long => 1200,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    "english".to_string()
}

/// Summarization options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryOptions {
    #[serde(default)]
    pub summary_type: SummaryType,

    #[serde(default)]
    pub length: LengthTier,

    #[serde(default = "default_true")]
    pub include_bullet_points: bool,

    #[serde(default = "default_true")]
    pub include_key_points: bool,

    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            summary_type: SummaryType::default(),
            length: LengthTier::default(),
            include_bullet_points: true,
            include_key_points: true,
            language: default_language(),
        }
    }
}

impl SummaryOptions {
    /// Build options from a loosely shaped payload.
    ///
    /// Never fails: unknown tags fall back (`general`, `medium`) and mistyped
    /// or missing fields keep their defaults.
    pub fn lenient(value: &Value) -> Self {
        let defaults = Self::default();
        let Some(map) = value.as_object() else {
            return defaults;
        };

        Self {
            summary_type: map
                .get("summary_type")
                .and_then(Value::as_str)
                .map(SummaryType::from_tag)
                .unwrap_or(defaults.summary_type),
            length: map
                .get("length")
                .and_then(Value::as_str)
                .map(LengthTier::from_tag)
                .unwrap_or(defaults.length),
            include_bullet_points: map
                .get("include_bullet_points")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.include_bullet_points),
            include_key_points: map
                .get("include_key_points")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.include_key_points),
            language: map
                .get("language")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(defaults.language),
        }
    }
}

/// Result of one AI summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub word_count_original: usize,
    pub word_count_summary: usize,
    pub compression_ratio: f64,
    pub reading_time_original: u32,
    pub reading_time_summary: u32,
    pub key_phrases: Vec<String>,

    /// `"bullet_points"` when bullet formatting was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_points_included: Option<bool>,
}

impl SummaryResult {
    /// Minutes saved by reading the summary instead of the original
    pub fn reading_time_saved(&self) -> i64 {
        i64::from(self.reading_time_original) - i64::from(self.reading_time_summary)
    }
}

/// Audit row for one processed chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Unique identifier
    pub id: String,
    pub user_id: String,
    pub conversation_id: String,

    /// Original text, truncated to `SummaryRecord::MAX_ORIGINAL_CHARS`
    pub original_text: String,
    pub summary_type: SummaryType,
    pub length: LengthTier,
    pub summary: String,
    pub word_count_original: usize,
    pub word_count_summary: usize,
    pub compression_ratio: f64,
    pub created_at: DateTime<Utc>,
}

impl SummaryRecord {
    pub const MAX_ORIGINAL_CHARS: usize = 10_000;

    /// Create new record with a fresh id
    pub fn new(
        user_id: impl Into<String>,
        conversation_id: impl Into<String>,
        original_text: &str,
        options: &SummaryOptions,
        result: &SummaryResult,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            conversation_id: conversation_id.into(),
            original_text: original_text.chars().take(Self::MAX_ORIGINAL_CHARS).collect(),
            summary_type: options.summary_type,
            length: options.length,
            summary: result.summary.clone(),
            word_count_original: result.word_count_original,
            word_count_summary: result.word_count_summary,
            compression_ratio: result.compression_ratio,
            created_at: Utc::now(),
        }
    }
}

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Chat completion request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// Model name (e.g., "gpt-3.5-turbo")
    pub model: String,

    pub messages: Vec<ChatMessage>,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Temperature (0.0 - 2.0)
    pub temperature: f32,
}

/// Chat completion response (only the fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    /// Null when the model returned no text
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_tags_fall_back() {
        assert_eq!(SummaryType::from_tag("meeting"), SummaryType::Meeting);
        assert_eq!(SummaryType::from_tag("poetry"), SummaryType::General);
        assert_eq!(LengthTier::from_tag("long"), LengthTier::Long);
        assert_eq!(LengthTier::from_tag("huge"), LengthTier::Medium);
    }

    #[test]
    fn test_max_tokens() {
        assert_eq!(LengthTier::Short.max_tokens(), 500);
        assert_eq!(LengthTier::Medium.max_tokens(), 800);
        assert_eq!(LengthTier::Long.max_tokens(), 1200);
    }

    #[test]
    fn test_options_defaults() {
        let options: SummaryOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, SummaryOptions::default());
        assert_eq!(options.language, "english");
        assert!(options.include_bullet_points);
        assert!(options.include_key_points);
    }

    #[test]
    fn test_strict_options_reject_unknown_type() {
        let parsed = serde_json::from_value::<SummaryOptions>(json!({"summary_type": "poetry"}));
        assert!(parsed.is_err());
        let parsed = serde_json::from_value::<SummaryOptions>(json!({"length": "huge"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_lenient_options() {
        let options = SummaryOptions::lenient(&json!({
            "summary_type": "poetry",
            "length": "short",
            "include_bullet_points": "yes",
            "include_key_points": false,
        }));
        assert_eq!(options.summary_type, SummaryType::General);
        assert_eq!(options.length, LengthTier::Short);
        assert!(options.include_bullet_points);
        assert!(!options.include_key_points);

        assert_eq!(SummaryOptions::lenient(&Value::Null), SummaryOptions::default());
    }

    #[test]
    fn test_result_serialization_skips_unset_flags() {
        let result = SummaryResult {
            summary: "short".to_string(),
            word_count_original: 20,
            word_count_summary: 1,
            compression_ratio: 95.0,
            reading_time_original: 1,
            reading_time_summary: 1,
            key_phrases: vec![],
            format: None,
            key_points_included: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("format").is_none());
        assert!(json.get("key_points_included").is_none());
        assert_eq!(result.reading_time_saved(), 0);
    }

    #[test]
    fn test_record_truncates_original_text() {
        let result = SummaryResult {
            summary: "s".to_string(),
            word_count_original: 1,
            word_count_summary: 1,
            compression_ratio: 0.0,
            reading_time_original: 1,
            reading_time_summary: 1,
            key_phrases: vec![],
            format: None,
            key_points_included: None,
        };
        let long_text = "é".repeat(SummaryRecord::MAX_ORIGINAL_CHARS + 50);
        let record = SummaryRecord::new("u1", "c1", &long_text, &SummaryOptions::default(), &result);
        assert_eq!(record.original_text.chars().count(), SummaryRecord::MAX_ORIGINAL_CHARS);
        assert!(!record.id.is_empty());
    }

    #[test]
    fn test_chat_message_serializes_lowercase_role() {
        let msg = ChatMessage::system("be brief");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"role": "system", "content": "be brief"})
        );
    }
}
