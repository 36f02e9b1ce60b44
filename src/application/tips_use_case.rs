// ============================================================
// Layer 2 — TipsUseCase
// ============================================================
// Study guidance for a notes file:
//
//   Step 1: Load and clean notes                 (Layer 4 - data)
//   Step 2: Key terms, tips and topic groups     (Layer 5 - nlp)
//   Step 3: Resources for the subject            (Layer 5b - study)
//
// `resources` is the catalog lookup on its own, by subject or
// by a free-text search.

use std::path::Path;

use anyhow::Result;

use crate::application::{config::StudyConfig, notes::load_clean_notes};
use crate::domain::study::Resource;
use crate::nlp::{
    text::extract_key_terms,
    tips::{cluster_topics, generate_study_tips},
};
use crate::study::resources::{resources_for_subject, search_resources};

#[derive(Debug, Clone)]
pub struct StudyGuide {
    pub subject:   String,
    pub key_terms: Vec<String>,
    pub tips:      Vec<String>,
    pub topics:    Vec<Vec<String>>,
    pub resources: Vec<Resource>,
}

pub struct TipsUseCase {
    config: StudyConfig,
}

impl TipsUseCase {
    pub fn new(config: StudyConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, notes: &Path, subject: Option<&str>) -> Result<StudyGuide> {
        let text    = load_clean_notes(notes)?;
        let subject = self.config.subject_or_default(subject);

        let key_terms = extract_key_terms(&text, self.config.key_terms);
        let topics    = cluster_topics(&key_terms, self.config.topic_clusters);

        tracing::info!(
            "Study guide for '{}': {} key terms in {} topic groups",
            subject,
            key_terms.len(),
            topics.len(),
        );

        Ok(StudyGuide {
            tips:      generate_study_tips(&text, &subject),
            resources: resources_for_subject(&subject),
            subject,
            key_terms,
            topics,
        })
    }

    /// Catalog entries matching `query`, or the list for `subject`
    /// (the configured default when None) if there is no query
    pub fn resources(&self, subject: Option<&str>, query: Option<&str>) -> Vec<Resource> {
        match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => search_resources(q),
            None    => resources_for_subject(&self.config.subject_or_default(subject)),
        }
    }
}
