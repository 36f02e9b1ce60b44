// ============================================================
// Layer 5 — NLP Layer
// ============================================================
// All text analysis lives here. Every function is a pure
// function of its inputs; the only non-determinism comes in
// through the RandomSource trait (Layer 3).
//
// No file I/O and no printing in this layer, so everything can
// be unit tested with string literals and a seeded StdRng.
//
// What's in this layer:
//
//   lexicon.rs    — Static word tables (stopwords, generic
//                   distractors, the blank placeholder)
//
//   text.rs       — Text Analysis Pipeline
//                   tokenize → remove_stopwords → word_frequency
//                   → extract_key_terms, plus sentence splitting
//                   and the complexity heuristic
//
//   summarizer.rs — Extractive summary via sentence scoring
//                   and a greedy word-budget fold
//
//   patterns.rs   — Labelled regex rules for definitions
//                   and formulas
//
//   structured.rs — Revision sheet: concepts, definitions,
//                   formulas, tips, summary
//
//   mcq.rs        — MCQ Synthesizer: fill-in-the-blank,
//                   true/false and key-concept questions with
//                   synthesized distractors
//
//   adaptive.rs   — Adaptive Selector: difficulty-biased quiz
//                   selection and per-answer difficulty steps
//
//   tips.rs       — Study tips and topic grouping
//
// Reference: Rust Book §8 (Collections), §13 (Iterators)

/// Stopwords and other read-only word lists
pub mod lexicon;

/// Tokenization, key terms, sentences and complexity
pub mod text;

/// Extractive summarization
pub mod summarizer;

/// Definition and formula pattern tables
pub mod patterns;

/// Structured revision summaries
pub mod structured;

/// Multiple-choice question generation
pub mod mcq;

/// Difficulty-adaptive question selection
pub mod adaptive;

/// Study tips and topic clustering
pub mod tips;
