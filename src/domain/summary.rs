// ============================================================
// Layer 3 — Structured Summary Domain Types
// ============================================================
// The revision sheet built from a set of notes: bullet-point
// concepts, term definitions, formulas, tips and a short
// extractive summary. Fully derived from the input text.

use serde::{Deserialize, Serialize};

/// A term paired with the sentence fragment that defines it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub term:       String,
    pub definition: String,
}

impl Definition {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self { term: term.into(), definition: definition.into() }
    }
}

/// Bookkeeping about how a summary was produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingInfo {
    /// "Text Notes", "PDF Document" or "YouTube Video"
    pub source_type: String,

    /// Whitespace-separated words in the input
    pub word_count: usize,

    /// Wall-clock time, formatted like "3ms"
    pub processing_time: String,
}

/// The complete revision sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredSummary {
    pub key_concepts:    Vec<String>,
    pub definitions:     Vec<Definition>,
    pub formulas:        Vec<String>,
    pub revision_tips:   Vec<String>,
    pub summary:         String,
    pub processing_info: ProcessingInfo,
}
