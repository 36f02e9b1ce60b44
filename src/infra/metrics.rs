// ============================================================
// Layer 6 — Attempt Logger
// ============================================================
// Appends one CSV row per completed quiz so progress can be
// charted in a spreadsheet.
//
// Output file: <data-dir>/attempts.csv
//
// Example:
//   completed_at,subject,score,total,accuracy
//   2024-03-09T10:15:00+00:00,Biology,7,10,70.00
//   2024-03-10T18:02:41+00:00,Biology,9,10,90.00
//
// progress.json is the source of truth for adaptive difficulty;
// this file is only a log.
//
// Reference: Rust Book §12 (I/O and File Handling)

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::domain::progress::QuizAttempt;

const CSV_HEADER: &str = "completed_at,subject,score,total,accuracy";

pub struct AttemptLogger {
    csv_path: PathBuf,
}

impl AttemptLogger {
    /// Create the logger, writing the header if the file is new
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create data directory '{}'", dir.display()))?;

        let csv_path = dir.join("attempts.csv");

        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)
                .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;
            writeln!(f, "{CSV_HEADER}")?;
            tracing::debug!("Created attempts CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one attempt as a CSV row
    pub fn log(&self, attempt: &QuizAttempt) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        writeln!(
            f,
            "{},{},{},{},{:.2}",
            attempt.completed_at.to_rfc3339(),
            csv_field(&attempt.subject),
            attempt.score,
            attempt.total_questions,
            attempt.accuracy,
        )?;

        tracing::debug!("Logged attempt for '{}' to '{}'", attempt.subject, self.csv_path.display());
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

/// Quote a field only when it contains a comma, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_header_written_once() {
        let dir = tempdir().unwrap();
        let logger = AttemptLogger::new(dir.path()).unwrap();
        logger.log(&QuizAttempt::new("Biology", 7, 10)).unwrap();

        // reopening must not write a second header
        let logger = AttemptLogger::new(dir.path()).unwrap();
        logger.log(&QuizAttempt::new("Physics", 1, 4)).unwrap();

        let csv   = fs::read_to_string(logger.csv_path()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].ends_with(",Biology,7,10,70.00"));
        assert!(lines[2].ends_with(",Physics,1,4,25.00"));
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("Biology"), "Biology");
        assert_eq!(csv_field("Art, Design"), "\"Art, Design\"");
        assert_eq!(csv_field("The \"Basics\""), "\"The \"\"Basics\"\"\"");
    }
}
