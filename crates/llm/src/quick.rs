//! Summaries without a model: sentence truncation and bullet lists

const SENTENCE_SEPARATOR: &str = ". ";

pub const DEFAULT_SENTENCES: usize = 3;
pub const DEFAULT_MAX_BULLETS: usize = 5;

/// First `num_sentences` sentences, or the whole text when it is already that short
pub fn extract_first_sentences(text: &str, num_sentences: usize) -> String {
    let sentences: Vec<&str> = text.split(SENTENCE_SEPARATOR).collect();
    if sentences.len() <= num_sentences {
        return text.to_string();
    }

    format!("{}.", sentences[..num_sentences].join(SENTENCE_SEPARATOR))
}

/// Bulleted list of the first `max_bullets` sentences under a "Quick Summary" header
pub fn create_bullet_summary(text: &str, max_bullets: usize) -> String {
    let mut summary = String::from("**Quick Summary:**\n\n");

    for sentence in text.split(SENTENCE_SEPARATOR).take(max_bullets) {
        let sentence = sentence.trim();
        if !sentence.is_empty() {
            summary.push_str(&format!("• {}.\n", sentence));
        }
    }

    summary
}
