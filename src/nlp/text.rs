// ============================================================
// Layer 5 — Text Analysis Pipeline
// ============================================================
// The building blocks every other NLP module is made of:
//
//   raw text
//       │
//       ▼
//   tokenize          → lowercase word units, punctuation removed
//       │
//       ▼
//   remove_stopwords  → drop function words and tiny tokens
//       │
//       ▼
//   word_frequency    → counts, in first-seen order
//       │
//       ▼
//   extract_key_terms → top-N terms by count
//
// Sentences are split separately (split_sentences) and scored
// by the summarizer.
//
// All functions are total: empty input gives empty output.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::domain::question::Difficulty;
use crate::nlp::lexicon::{is_stopword, MIN_CONTENT_WORD_LEN};

/// Split text into lowercase word tokens.
///
/// Every character that is neither a word character
/// (alphanumeric or `_`) nor whitespace becomes a space, so
/// "cell-division" yields two tokens.
///
/// Example:
///   tokenize("Hello, World!") → ["hello", "world"]
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Characters that can appear inside a token
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Keep only content words: not a stopword and longer than two characters.
pub fn remove_stopwords(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| !is_stopword(t) && char_len(t) > MIN_CONTENT_WORD_LEN)
        .cloned()
        .collect()
}

/// Count tokens. Iteration order is first-seen order, which is
/// what makes key-term ties stable for a given input.
pub fn word_frequency(tokens: &[String]) -> IndexMap<String, usize> {
    let mut freq: IndexMap<String, usize> = IndexMap::new();
    for token in tokens {
        *freq.entry(token.clone()).or_insert(0) += 1;
    }
    freq
}

/// Bag-of-words over the content words of `text`
pub fn create_bow(text: &str) -> IndexMap<String, usize> {
    word_frequency(&remove_stopwords(&tokenize(text)))
}

/// The `top_n` most frequent content words, most frequent first.
/// Ties keep the order in which the words first appeared.
pub fn extract_key_terms(text: &str, top_n: usize) -> Vec<String> {
    let freq = create_bow(text);

    let mut ranked: Vec<(String, usize)> = freq.into_iter().collect();
    // sort_by is stable, so equal counts stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked.into_iter().take(top_n).map(|(word, _)| word).collect()
}

/// Split on runs of `.`, `!` and `?`, trim, and keep sentences
/// longer than ten characters.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| char_len(s) > 10)
        .map(str::to_string)
        .collect()
}

/// Lexical complexity heuristic used to tag question difficulty.
///
///   score = average_word_length * 0.6 + unique_token_ratio * 10
///
///   score < 5 → easy
///   score < 7 → medium
///   otherwise → hard
pub fn calculate_complexity(text: &str) -> Difficulty {
    let tokens = tokenize(text);
    let n      = tokens.len().max(1) as f64;

    let avg_word_len = tokens.iter().map(|t| char_len(t)).sum::<usize>() as f64 / n;
    let unique_ratio = tokens.iter().collect::<HashSet<_>>().len() as f64 / n;

    let score = avg_word_len * 0.6 + unique_ratio * 10.0;

    if score < 5.0 {
        Difficulty::Easy
    } else if score < 7.0 {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

/// Length in characters (not bytes)
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Uppercase the first character: "mitosis" → "Mitosis"
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None        => String::new(),
    }
}
