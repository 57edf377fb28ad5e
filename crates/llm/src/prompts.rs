//! Prompt templates for summarization

use crate::types::{LengthTier, SummaryType};

/// System instruction plus user template for one content type.
///
/// The user template carries `{text}` and `{length}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub system: &'static str,
    pub user: &'static str,
}

impl PromptTemplate {
    /// Fill the user template
    pub fn render_user(&self, text: &str, length: LengthTier) -> String {
        self.user
            .replace("{length}", length.as_str())
            .replace("{text}", text)
    }
}

/// Appended to the user prompt when bullet formatting is requested
pub const BULLET_INSTRUCTION: &str = "\nPlease use bullet points for better readability.";

const GENERAL: PromptTemplate = PromptTemplate {
    system: r#"You are an expert text summarizer. Create clear, concise, and accurate summaries that capture the main points and essential information from the provided text.

Guidelines:
- Focus on key information and main ideas
- Maintain the original meaning and context
- Use clear, readable language
- Remove redundant information
- Preserve important facts, figures, and names"#,
    user: r#"Please summarize the following text. Focus on the main points and key information.

Text to summarize:
{text}

Please provide a {length} summary."#,
};

const MEETING: PromptTemplate = PromptTemplate {
    system: r#"You are a meeting notes summarizer. Extract key decisions, action items, and important discussion points from meeting transcripts.

Guidelines:
- Identify decisions made
- Extract action items with owners if mentioned
- Note important discussion points
- Capture deadlines and timelines
- Highlight key metrics or numbers discussed"#,
    user: r#"Please summarize these meeting notes. Extract key decisions, action items, and important discussion points.

Meeting Notes:
{text}

Please provide a {length} summary with clear sections for decisions, action items, and key points."#,
};

const NEWS: PromptTemplate = PromptTemplate {
    system: r#"You are a news article summarizer. Create summaries that capture the key facts, events, and implications from news articles.

Guidelines:
- Identify the main event or news
- Capture key facts and figures
- Note important people, organizations, locations
- Include timelines if relevant
- Mention implications or consequences"#,
    user: r#"Please summarize this news article. Focus on the key facts, main events, and important details.

News Article:
{text}

Please provide a {length} summary that captures the essential information."#,
};

const TECHNICAL: PromptTemplate = PromptTemplate {
    system: r#"You are a technical document summarizer. Create summaries of technical content that are accessible while preserving important technical details.

Guidelines:
- Explain technical concepts clearly
- Preserve important specifications and requirements
- Highlight key features or functionalities
- Note limitations or constraints
- Include important code snippets or architecture if relevant"#,
    user: r#"Please summarize this technical document. Make it accessible while preserving important technical details.

Technical Content:
{text}

Please provide a {length} summary that highlights key technical information."#,
};

const CONVERSATION: PromptTemplate = PromptTemplate {
    system: r#"You are a conversation thread summarizer. Extract the main topics, decisions, and key points from conversation threads.

Guidelines:
- Identify main topics discussed
- Extract decisions or conclusions reached
- Note action items or next steps
- Capture important information shared
- Highlight questions that need answers"#,
    user: r#"Please summarize this conversation thread. Extract the main topics, decisions, and key points.

Conversation:
{text}

Please provide a {length} summary that captures the essence of the discussion."#,
};

const LOG: PromptTemplate = PromptTemplate {
    system: r#"You are a system log analyzer. Summarize log files by identifying patterns, errors, and important events.

Guidelines:
- Identify error patterns and frequencies
- Note critical events or alerts
- Highlight performance issues
- Capture security-related events
- Summarize system health indicators"#,
    user: r#"Please analyze and summarize these system logs. Identify patterns, errors, and important events.

Log Data:
{text}

Please provide a {length} summary focusing on critical issues and patterns."#,
};

/// Prompt pair for a content type
pub fn prompt_for(summary_type: SummaryType) -> &'static PromptTemplate {
    match summary_type {
        SummaryType::General => &GENERAL,
        SummaryType::Meeting => &MEETING,
        SummaryType::News => &NEWS,
        SummaryType::Technical => &TECHNICAL,
        SummaryType::Conversation => &CONVERSATION,
        SummaryType::Log => &LOG,
    }
}

/// Prompt pair for a raw tag; unknown tags get the general pair
pub fn prompt_for_tag(tag: &str) -> &'static PromptTemplate {
    prompt_for(SummaryType::from_tag(tag))
}

/// Descriptive size guideline (help text only, not enforced)
pub fn length_guideline(length: LengthTier) -> &'static str {
    match length {
        LengthTier::Short => "2-3 sentences or 50-100 words",
        LengthTier::Medium => "1 paragraph or 100-200 words",
        LengthTier::Long => "2-3 paragraphs or 200-400 words",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_placeholders() {
        for summary_type in SummaryType::ALL {
            let template = prompt_for(summary_type);
            assert!(template.user.contains("{text}"), "{:?}", summary_type);
            assert!(template.user.contains("{length}"), "{:?}", summary_type);
            assert!(!template.system.is_empty());
        }
    }

    #[test]
    fn test_unknown_tag_falls_back_to_general() {
        assert_eq!(prompt_for_tag("poetry"), prompt_for(SummaryType::General));
        assert_eq!(prompt_for_tag("log"), prompt_for(SummaryType::Log));
    }

    #[test]
    fn test_render_user() {
        let rendered = prompt_for(SummaryType::News).render_user("Markets rallied.", LengthTier::Short);
        assert!(rendered.contains("News Article:\nMarkets rallied.\n"));
        assert!(rendered.ends_with("Please provide a short summary that captures the essential information."));
    }

    #[test]
    fn test_render_user_leaves_braces_in_text_alone() {
        let rendered = prompt_for(SummaryType::Technical)
            .render_user("fn main() { println!(\"{length}\"); }", LengthTier::Long);
        assert!(rendered.contains("{ println!(\"{length}\"); }"));
        assert!(rendered.contains("Please provide a long summary"));
    }

    #[test]
    fn test_length_guidelines() {
        assert_eq!(length_guideline(LengthTier::Medium), "1 paragraph or 100-200 words");
    }
}
