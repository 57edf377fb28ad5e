//! Text preprocessing and summary metrics

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Markup tags: `<p>`, `</div>`, `<br/>`, `<!-- ... -->`, `<!DOCTYPE ...>`.
/// A bare `<` followed by a space is ordinary text and stays.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->|</?[A-Za-z!][^<>]*>").expect("valid tag pattern"));

/// Words ignored by key phrase extraction
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;
pub const DEFAULT_MAX_PHRASES: usize = 5;

/// Whitespace-delimited word count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Strip markup, decode entities, collapse whitespace runs and trim
pub fn clean_text(text: &str) -> String {
    let stripped = TAG_RE.replace_all(text, "");
    let decoded = html_escape::decode_html_entities(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Estimated reading time in whole minutes, never below 1
pub fn estimate_reading_time(text: &str, words_per_minute: usize) -> u32 {
    let minutes = (word_count(text) as f64 / words_per_minute.max(1) as f64).round_ties_even();
    (minutes as u32).max(1)
}

/// Percentage of words removed by the summary, rounded to two decimals.
///
/// Returns 0 when the original has no words.
pub fn calculate_compression_ratio(original: &str, summary: &str) -> f64 {
    let original_words = word_count(original);
    if original_words == 0 {
        return 0.0;
    }

    let summary_words = word_count(summary);
    let ratio = (1.0 - summary_words as f64 / original_words as f64) * 100.0;
    round_two_decimals(ratio)
}

/// Two-decimal rounding on the exact binary value, ties to even
fn round_two_decimals(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Most frequent meaningful words, most frequent first.
///
/// Equal counts keep the order in which the words first appeared.
pub fn extract_key_phrases(text: &str, max_phrases: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for word in lowered.split_whitespace() {
        if word.chars().count() <= 3 || STOP_WORDS.contains(&word) {
            continue;
        }
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(max_phrases)
        .map(|(word, _)| word.to_string())
        .collect()
}
