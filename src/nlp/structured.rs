// ============================================================
// Layer 5 — Structured Summary Generator
// ============================================================
// Turns a block of notes into a revision sheet:
//
//   key concepts  → explanatory sentences that mention key terms
//   definitions   → "X is Y" style sentences (see patterns.rs)
//   formulas      → equations, numbered steps, symbol-heavy lines
//   revision tips → templated advice using the above
//   summary       → the extractive summary (summarizer.rs)

use std::collections::HashSet;
use std::time::Instant;

use crate::domain::document::SourceType;
use crate::domain::summary::{Definition, ProcessingInfo, StructuredSummary};
use crate::nlp::patterns::{has_math_symbol, match_definition, match_formula_rule};
use crate::nlp::summarizer::summarize_text;
use crate::nlp::text::{capitalize, char_len, extract_key_terms, split_sentences, tokenize};

const KEY_TERM_COUNT: usize = 15;
const SUMMARY_WORDS: usize = 80;

const MIN_CONCEPTS: usize = 5;
const MAX_CONCEPTS: usize = 10;
const MAX_DEFINITIONS: usize = 8;
const MAX_FORMULAS: usize = 6;
const MAX_TIPS: usize = 8;

/// Build the full revision sheet for `text`.
pub fn generate_structured_summary(
    text:        &str,
    source_type: SourceType,
    subject:     &str,
) -> StructuredSummary {
    generate_structured_summary_with(text, source_type, subject, SUMMARY_WORDS)
}

/// Same as `generate_structured_summary` with a custom summary length
pub fn generate_structured_summary_with(
    text:          &str,
    source_type:   SourceType,
    subject:       &str,
    summary_words: usize,
) -> StructuredSummary {
    let started = Instant::now();

    let key_terms    = extract_key_terms(text, KEY_TERM_COUNT);
    let summary      = summarize_text(text, summary_words);
    let key_concepts = key_concepts(text, &key_terms);
    let definitions  = extract_definitions(text);
    let formulas     = extract_formulas(text);
    let revision_tips = revision_tips(&key_terms, &definitions, &formulas, subject);

    tracing::debug!(
        "Structured summary: {} concepts, {} definitions, {} formulas",
        key_concepts.len(),
        definitions.len(),
        formulas.len(),
    );

    StructuredSummary {
        key_concepts,
        definitions,
        formulas,
        revision_tips,
        summary,
        processing_info: ProcessingInfo {
            source_type:     source_type.label().to_string(),
            // blank text has no words, and edge whitespace adds none
            word_count:      text.split_whitespace().count(),
            processing_time: format!("{}ms", started.elapsed().as_millis()),
        },
    }
}

/// Explanatory sentences (30..200 chars) that mention a key term,
/// padded with "Key concept: <Term>" lines when there are fewer than five.
pub fn key_concepts(text: &str, key_terms: &[String]) -> Vec<String> {
    let term_set: HashSet<&str> = key_terms.iter().map(String::as_str).collect();

    let mut concepts: Vec<String> = split_sentences(text)
        .into_iter()
        .filter(|sentence| {
            let len = char_len(sentence);
            len > 30
                && len < 200
                && tokenize(sentence).iter().any(|t| term_set.contains(t.as_str()))
        })
        .collect();

    if concepts.len() < MIN_CONCEPTS {
        let missing = MIN_CONCEPTS - concepts.len();
        concepts.extend(
            key_terms
                .iter()
                .take(missing)
                .map(|term| format!("Key concept: {}", capitalize(term))),
        );
    }

    concepts.truncate(MAX_CONCEPTS);
    concepts
}

/// At most eight definitions, one per sentence, first matching rule wins
pub fn extract_definitions(text: &str) -> Vec<Definition> {
    split_sentences(text)
        .iter()
        .filter_map(|sentence| match_definition(sentence).map(|(_, def)| def))
        .take(MAX_DEFINITIONS)
        .collect()
}

/// At most six formula-like sentences, without duplicates
pub fn extract_formulas(text: &str) -> Vec<String> {
    let mut formulas: Vec<String> = Vec::new();

    for sentence in split_sentences(text) {
        let matched = match_formula_rule(&sentence).is_some() || has_math_symbol(&sentence);
        if matched && !formulas.contains(&sentence) {
            formulas.push(sentence);
        }
    }

    formulas.truncate(MAX_FORMULAS);
    formulas
}

fn revision_tips(
    key_terms:   &[String],
    definitions: &[Definition],
    formulas:    &[String],
    subject:     &str,
) -> Vec<String> {
    let top_terms = key_terms.iter().take(3).cloned().collect::<Vec<_>>().join(", ");

    let defined_terms = definitions
        .iter()
        .take(2)
        .map(|d| d.term.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let review_target = if !defined_terms.is_empty() {
        defined_terms
    } else {
        key_terms.first().cloned().unwrap_or_else(|| "core concepts".to_string())
    };

    let mut tips = Vec::with_capacity(MAX_TIPS + 1);
    if !formulas.is_empty() {
        tips.push(format!("Practice formulas: work through {} equations", formulas.len()));
    }
    tips.extend([
        format!("Focus on key terms: {top_terms}"),
        format!("Review definitions for: {review_target}"),
        format!("Do 5 practice questions on {subject}"),
        "Summarize main ideas in your own words".to_string(),
        "Test yourself before reviewing notes".to_string(),
        "Create flashcards for important terms".to_string(),
        "Practice explaining concepts aloud".to_string(),
        "Connect new concepts to what you already know".to_string(),
    ]);

    tips.truncate(MAX_TIPS);
    tips
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const PHYSICS: &str = "Velocity is the rate of change of position over time. \
        Acceleration refers to the rate of change of velocity. \
        Newton's second law gives the relation F = m * a for constant mass. \
        Step 1: measure the mass of the trolley on the balance. \
        Friction always opposes the motion of the trolley along the track.";

    #[test]
    fn test_structured_summary_sections() {
        let s = generate_structured_summary(PHYSICS, SourceType::Text, "Physics");

        // "Step 1: ..." also reads as a "term: body" definition
        assert_eq!(s.definitions.len(), 3);
        assert_eq!(s.definitions[0].term, "Velocity");
        assert_eq!(s.definitions[1].term, "Acceleration");
        assert_eq!(s.definitions[2].term, "Step 1");

        assert_eq!(s.formulas.len(), 2);
        assert!(s.formulas[0].contains("F = m * a"));
        assert!(s.formulas[1].starts_with("Step 1"));

        assert!(s.revision_tips[0].starts_with("Practice formulas: work through 2"));
        assert!(s.revision_tips.len() <= 8);
        assert!(s.revision_tips.iter().any(|t| t == "Do 5 practice questions on Physics"));
        assert!(s.revision_tips.iter().any(|t| t == "Review definitions for: Velocity, Acceleration"));

        assert_eq!(s.processing_info.source_type, "Text Notes");
        assert_eq!(s.processing_info.word_count, PHYSICS.split_whitespace().count());
        assert!(s.processing_info.processing_time.ends_with("ms"));
        assert!(!s.summary.is_empty());
    }

    #[test]
    fn test_key_concepts_padded_from_key_terms() {
        let terms    = vec!["enzyme".to_string(), "substrate".to_string()];
        let concepts = key_concepts("Enzymes are proteins.", &terms);
        assert_eq!(concepts, vec!["Key concept: Enzyme", "Key concept: Substrate"]);
    }

    #[test]
    fn test_key_concepts_capped() {
        let text  = "The enzyme binds to its substrate quickly. ".repeat(15);
        let terms = extract_key_terms(&text, 15);
        assert_eq!(key_concepts(&text, &terms).len(), 10);
    }

    #[test]
    fn test_formulas_deduplicated() {
        let text = "Speed = distance / time in all cases. Speed = distance / time in all cases.";
        assert_eq!(extract_formulas(text).len(), 1);
    }

    #[test]
    fn test_tips_without_definitions_fall_back() {
        let s = generate_structured_summary("", SourceType::Pdf, "General");
        assert!(s.revision_tips.iter().any(|t| t == "Review definitions for: core concepts"));
        assert_eq!(s.processing_info.source_type, "PDF Document");
        assert_eq!(s.processing_info.word_count, 0);
        assert!(s.key_concepts.is_empty());
    }

    #[test]
    fn test_word_count_ignores_edge_whitespace() {
        let s = generate_structured_summary("  \n two words \n", SourceType::Text, "General");
        assert_eq!(s.processing_info.word_count, 2);
        assert_eq!(s.processing_info.source_type, "Text Notes");
    }
}
