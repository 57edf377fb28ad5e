use once_cell::sync::Lazy;
use regex::Regex;
use summarizer_common::{Result, SummarizerError};

use crate::text::word_count;

pub const DEFAULT_MIN_WORDS: usize = 10;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://\S+").expect("valid url pattern"));

/// Reject text with fewer than `min_words` words
pub fn validate_text_length(text: &str, min_words: usize) -> Result<()> {
    let count = word_count(text);
    if count < min_words {
        return Err(SummarizerError::validation(format!(
            "Text too short for summarization. Minimum {} words required, got {}.",
            min_words, count
        )));
    }
    Ok(())
}

/// Whether the text starts with an http(s) URL
pub fn is_url(text: &str) -> bool {
    URL_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text_length() {
        let ten = "one two three four five six seven eight nine ten";
        assert!(validate_text_length(ten, DEFAULT_MIN_WORDS).is_ok());

        let err = validate_text_length("only three words", DEFAULT_MIN_WORDS).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Text too short for summarization. Minimum 10 words required, got 3."
        );
    }

    #[test]
    fn test_validate_empty_text() {
        let err = validate_text_length("   ", DEFAULT_MIN_WORDS).unwrap_err();
        assert!(err.to_string().ends_with("got 0."));
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/article"));
        assert!(is_url("http://localhost:8000 and more"));
        assert!(!is_url("see https://example.com"));
        assert!(!is_url("ftp://example.com"));
        assert!(!is_url("https://"));
    }
}
