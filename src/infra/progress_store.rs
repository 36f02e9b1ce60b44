// ============================================================
// Layer 6 — Progress Store
// ============================================================
// Keeps every completed quiz in <data-dir>/progress.json so the
// next quiz on the same subject can adapt its difficulty.
//
// File layout (a JSON array, oldest first):
//   [
//     { "subject": "Biology", "score": 7, "totalQuestions": 10,
//       "accuracy": 70.0, "completedAt": "2024-03-09T10:15:00Z" },
//     ...
//   ]
//
// Subjects are compared case-insensitively. A subject with no
// attempts has a previous accuracy of 0, which maps to the
// easy band.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::domain::progress::QuizAttempt;

const PROGRESS_FILE: &str = "progress.json";

pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Store backed by `<dir>/progress.json`. The directory is
    /// created on the first write, not here.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { path: dir.as_ref().join(PROGRESS_FILE) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All recorded attempts, oldest first. No file means no attempts.
    pub fn load(&self) -> Result<Vec<QuizAttempt>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read progress from '{}'", self.path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Corrupt progress file '{}'", self.path.display()))
    }

    /// Append one attempt and rewrite the file
    pub fn record(&self, attempt: &QuizAttempt) -> Result<()> {
        let mut attempts = self.load()?;
        attempts.push(attempt.clone());

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create data directory '{}'", dir.display()))?;
        }

        let json = serde_json::to_string_pretty(&attempts)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write progress to '{}'", self.path.display()))?;

        tracing::debug!(
            "Recorded {} attempt ({}/{}), {} total",
            attempt.subject,
            attempt.score,
            attempt.total_questions,
            attempts.len(),
        );
        Ok(())
    }

    /// Attempts for one subject, oldest first
    pub fn history(&self, subject: &str) -> Result<Vec<QuizAttempt>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|a| a.subject.eq_ignore_ascii_case(subject))
            .collect())
    }

    /// Accuracy of the latest attempt on `subject`, or 0 if there is none
    pub fn previous_accuracy(&self, subject: &str) -> Result<f64> {
        Ok(self
            .history(subject)?
            .iter()
            .max_by_key(|a| a.completed_at)
            .map_or(0.0, |a| a.accuracy))
    }
}
