// ============================================================
// Layer 5 — Lexicon Tables
// ============================================================
// Read-only word lists shared by the text pipeline and the
// question generator. Built once on first use.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Common English function words that never become key terms
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
        "by", "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had",
        "do", "does", "did", "will", "would", "could", "should", "may", "might", "must",
        "shall", "can", "need", "dare", "ought", "used", "it", "its", "this", "that",
        "these", "those", "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
        "you", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
        "she", "her", "hers", "herself", "they", "them", "their", "theirs", "themselves",
        "what", "which", "who", "whom", "when", "where", "why", "how", "all", "each",
        "every", "both", "few", "more", "most", "other", "some", "such", "no", "nor",
        "not", "only", "own", "same", "so", "than", "too", "very", "just", "also",
    ]
    .into_iter()
    .collect()
});

/// Last-resort distractors when the notes don't offer enough words
pub const GENERIC_DISTRACTORS: [&str; 6] =
    ["various", "multiple", "different", "similar", "related", "unknown"];

/// Placeholder that replaces the answer in fill-in-the-blank prompts
pub const BLANK: &str = "_____";

/// Tokens of this length or shorter are never content words
pub const MIN_CONTENT_WORD_LEN: usize = 2;

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}
