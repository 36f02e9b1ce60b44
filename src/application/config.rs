// ============================================================
// Layer 2 — Study Configuration
// ============================================================
// Tunables shared by every command. Loaded from a JSON file
// when --config is given (see infra::config_store), otherwise
// the defaults below. Command-line flags override both.
//
// Example study-pal.json:
//   {
//     "summary_words": 60,
//     "mcq_count": 15,
//     "default_subject": "Biology"
//   }
//
// Missing keys fall back to their defaults, so a config file
// only needs the values it changes. `study-pal config --set
// mcq_count=15 --out study-pal.json` writes one.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// Target length of a plain extractive summary
    pub summary_words:            usize,
    /// Target length of the summary inside a structured summary
    pub structured_summary_words: usize,
    /// Questions generated by `mcq`
    pub mcq_count:                usize,
    /// Key terms printed by `summarize` and `tips`
    pub key_terms:                usize,
    /// Questions asked by `quiz`
    pub adaptive_count:           usize,
    /// Topic groups printed by `tips`
    pub topic_clusters:           usize,
    /// Subject used when none is given on the command line
    pub default_subject:          String,
    /// Where progress.json and attempts.csv live
    pub data_dir:                 PathBuf,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            summary_words:            50,
            structured_summary_words: 80,
            mcq_count:                10,
            key_terms:                10,
            adaptive_count:           10,
            topic_clusters:           3,
            default_subject:          "General".to_string(),
            data_dir:                 PathBuf::from("study_data"),
        }
    }
}

impl StudyConfig {
    /// The given subject, or the configured default when it is empty
    pub fn subject_or_default(&self, subject: Option<&str>) -> String {
        match subject.map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _                        => self.default_subject.clone(),
        }
    }

    /// Apply one `key=value` setting, e.g. `mcq_count=15`
    pub fn apply(&mut self, setting: &str) -> Result<()> {
        let Some((key, value)) = setting.split_once('=') else {
            bail!("Expected key=value, got '{setting}'");
        };
        let (key, value) = (key.trim(), value.trim());

        let count = || -> Result<usize> {
            value
                .parse()
                .with_context(|| format!("'{key}' needs a whole number, got '{value}'"))
        };

        match key {
            "summary_words"            => self.summary_words = count()?,
            "structured_summary_words" => self.structured_summary_words = count()?,
            "mcq_count"                => self.mcq_count = count()?,
            "key_terms"                => self.key_terms = count()?,
            "adaptive_count"           => self.adaptive_count = count()?,
            "topic_clusters"           => self.topic_clusters = count()?,
            "default_subject"          => self.default_subject = value.to_string(),
            "data_dir"                 => self.data_dir = PathBuf::from(value),
            other                      => bail!("Unknown config key '{other}'"),
        }
        Ok(())
    }
}
