// ============================================================
// Layer 2 — SummarizeUseCase
// ============================================================
// Turns a notes file into either
//
//   a plain summary:   key terms + extractive summary
//   a revision sheet:  StructuredSummary (concepts, definitions,
//                      formulas, tips, summary)
//
//   Step 1: Load and clean notes        (Layer 4 - data)
//   Step 2: Extract key terms           (Layer 5 - nlp)
//   Step 3: Summarise                   (Layer 5 - nlp)

use std::path::Path;

use anyhow::Result;

use crate::application::{config::StudyConfig, notes::load_clean_notes};
use crate::domain::document::SourceType;
use crate::domain::summary::StructuredSummary;
use crate::nlp::{
    structured::generate_structured_summary_with,
    summarizer::summarize_text,
    text::extract_key_terms,
};

/// Result of a plain summary run
#[derive(Debug, Clone, PartialEq)]
pub struct PlainSummary {
    pub key_terms:      Vec<String>,
    pub summary:        String,
    pub original_words: usize,
    pub summary_words:  usize,
}

pub struct SummarizeUseCase {
    config: StudyConfig,
}

impl SummarizeUseCase {
    pub fn new(config: StudyConfig) -> Self {
        Self { config }
    }

    /// Key terms and an extractive summary of `target_words` words
    /// (the configured length when None)
    pub fn summarize(&self, notes: &Path, target_words: Option<usize>) -> Result<PlainSummary> {
        let text  = load_clean_notes(notes)?;
        let words = target_words.unwrap_or(self.config.summary_words);

        let key_terms = extract_key_terms(&text, self.config.key_terms);
        let summary   = summarize_text(&text, words);

        tracing::info!(
            "Summarised {} words down to {} (target {})",
            text.split_whitespace().count(),
            summary.split_whitespace().count(),
            words,
        );

        Ok(PlainSummary {
            key_terms,
            original_words: text.split_whitespace().count(),
            summary_words:  summary.split_whitespace().count(),
            summary,
        })
    }

    /// Full revision sheet for `subject`
    pub fn structured(
        &self,
        notes:        &Path,
        subject:      &str,
        target_words: Option<usize>,
    ) -> Result<StructuredSummary> {
        let text  = load_clean_notes(notes)?;
        let words = target_words.unwrap_or(self.config.structured_summary_words);

        let sheet = generate_structured_summary_with(&text, SourceType::Text, subject, words);

        tracing::info!(
            "Structured summary for '{}': {} concepts, {} definitions, {} formulas",
            subject,
            sheet.key_concepts.len(),
            sheet.definitions.len(),
            sheet.formulas.len(),
        );
        Ok(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const NOTES: &str = "Osmosis is the movement of water across a membrane. \
        Water moves from high to low water potential. \
        The membrane is partially permeable to water. \
        Plant cells become turgid when water enters by osmosis.";

    fn notes_file(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("osmosis.txt");
        fs::write(&path, NOTES).unwrap();
        path
    }

    #[test]
    fn test_plain_summary() {
        let dir  = tempdir().unwrap();
        let path = notes_file(dir.path());

        let out = SummarizeUseCase::new(StudyConfig::default()).summarize(&path, Some(15)).unwrap();
        assert_eq!(out.key_terms[0], "water");
        assert!(out.key_terms.len() <= 10);
        assert!(out.summary_words as f64 <= 15.0 * 1.5);
        assert_eq!(out.original_words, NOTES.split_whitespace().count());
    }

    #[test]
    fn test_structured_summary() {
        let dir  = tempdir().unwrap();
        let path = notes_file(dir.path());

        let sheet = SummarizeUseCase::new(StudyConfig::default())
            .structured(&path, "Biology", None)
            .unwrap();
        assert_eq!(sheet.definitions[0].term, "Osmosis");
        assert_eq!(sheet.processing_info.source_type, "Text Notes");
        assert!(sheet.revision_tips.iter().any(|t| t.ends_with("on Biology")));
    }
}
