// ============================================================
// Layer 5 — Extractive Summarizer
// ============================================================
// Builds a summary by picking whole sentences from the notes
// rather than generating new text.
//
// How it works:
//   1. Take the top 15 key terms of the whole text.
//   2. Score each sentence by key-term density:
//        score = matched_tokens / total_tokens * length_penalty
//      length_penalty is 0.8 for sentences over 200 characters.
//      The first sentence gets +0.3 (lead sentences usually
//      introduce the topic).
//   3. Walk sentences from best to worst score, accepting each
//      one that keeps the running word count within 1.5x the
//      target. Stop as soon as the target is reached.
//   4. Put the accepted sentences back in document order.
//
// Texts with two sentences or fewer are returned unchanged.

use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::nlp::text::{char_len, extract_key_terms, split_sentences, tokenize};

/// Key terms used for sentence scoring
const SCORING_KEY_TERMS: usize = 15;

/// Sentences longer than this (in characters) are penalised
const LONG_SENTENCE_CHARS: usize = 200;
const LONG_SENTENCE_PENALTY: f64 = 0.8;

/// Bonus added to the first sentence's score
const LEAD_SENTENCE_BONUS: f64 = 0.3;

/// How far past the target word count a summary may run
const WORD_BUDGET_FACTOR: f64 = 1.5;

/// A sentence with its position in the source and its score
#[derive(Debug, Clone)]
struct ScoredSentence<'a> {
    index:    usize,
    sentence: &'a str,
    score:    f64,
}

/// Accumulator for the greedy selection fold
#[derive(Debug, Default)]
struct Selection {
    indices:    Vec<usize>,
    word_count: usize,
}

/// Key-term density of one sentence, with the long-sentence penalty applied
pub fn score_sentence(sentence: &str, key_terms: &HashSet<String>) -> f64 {
    let tokens  = tokenize(sentence);
    let matches = tokens.iter().filter(|t| key_terms.contains(*t)).count();

    let length_penalty = if char_len(sentence) > LONG_SENTENCE_CHARS {
        LONG_SENTENCE_PENALTY
    } else {
        1.0
    };

    matches as f64 / tokens.len().max(1) as f64 * length_penalty
}

/// Summarise `text` in roughly `target_word_count` words.
pub fn summarize_text(text: &str, target_word_count: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.len() <= 2 {
        return text.to_string();
    }

    let key_terms: HashSet<String> = extract_key_terms(text, SCORING_KEY_TERMS)
        .into_iter()
        .collect();

    let mut scored: Vec<ScoredSentence<'_>> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let bonus = if index == 0 { LEAD_SENTENCE_BONUS } else { 0.0 };
            ScoredSentence {
                index,
                sentence,
                score: score_sentence(sentence, &key_terms) + bonus,
            }
        })
        .collect();

    // Highest score first; stable, so ties keep document order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let budget = target_word_count as f64 * WORD_BUDGET_FACTOR;

    // Invariant: word_count <= budget. The fold breaks out once
    // word_count >= target_word_count.
    let outcome = scored.iter().try_fold(Selection::default(), |mut sel, item| {
        let words = item.sentence.split_whitespace().count();
        if (sel.word_count + words) as f64 <= budget {
            sel.indices.push(item.index);
            sel.word_count += words;
        }
        if sel.word_count >= target_word_count {
            ControlFlow::Break(sel)
        } else {
            ControlFlow::Continue(sel)
        }
    });

    let mut selection = match outcome {
        ControlFlow::Break(sel) | ControlFlow::Continue(sel) => sel,
    };
    selection.indices.sort_unstable();

    tracing::debug!(
        "Summary kept {} of {} sentences ({} words, target {})",
        selection.indices.len(),
        sentences.len(),
        selection.word_count,
        target_word_count,
    );

    let picked: Vec<&str> = selection
        .indices
        .iter()
        .map(|&i| sentences[i].as_str())
        .collect();

    format!("{}.", picked.join(". "))
}
