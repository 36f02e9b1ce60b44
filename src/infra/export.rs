// ============================================================
// Layer 6 — File Export
// ============================================================
// Writes generated artefacts to disk:
//   - study plans as CSV (rendered by study::planner)
//   - question sets as JSON (read back by the `quiz` command)

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::Local;

use crate::domain::question::GeneratedQuestion;
use crate::domain::study::StudyPlan;
use crate::study::planner::{csv_file_name, plan_to_csv};

/// Write `plan` as CSV. When `target` is a directory the file is
/// named after the subject. Returns the path written.
pub fn export_plan_csv(plan: &StudyPlan, target: &Path) -> Result<PathBuf> {
    let path = if target.is_dir() {
        target.join(csv_file_name(plan))
    } else {
        target.to_path_buf()
    };

    ensure_parent(&path)?;

    let csv = plan_to_csv(plan, Local::now().date_naive());
    fs::write(&path, csv)
        .with_context(|| format!("Cannot write study plan to '{}'", path.display()))?;

    tracing::info!("Study plan exported to '{}'", path.display());
    Ok(path)
}

/// Write questions as a pretty-printed JSON array
pub fn save_questions(questions: &[GeneratedQuestion], path: &Path) -> Result<()> {
    ensure_parent(path)?;

    let json = serde_json::to_string_pretty(questions)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write questions to '{}'", path.display()))?;

    tracing::info!("Saved {} questions to '{}'", questions.len(), path.display());
    Ok(())
}

/// Read a question set written by `save_questions`.
/// Malformed questions (wrong option count or answer index) are dropped.
pub fn load_questions(path: &Path) -> Result<Vec<GeneratedQuestion>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read questions from '{}'", path.display()))?;

    let questions: Vec<GeneratedQuestion> = serde_json::from_str(&json)
        .with_context(|| format!("Invalid question JSON in '{}'", path.display()))?;

    let total = questions.len();
    let valid: Vec<GeneratedQuestion> = questions.into_iter().filter(|q| q.is_well_formed()).collect();
    if valid.len() < total {
        tracing::warn!("Dropped {} malformed questions from '{}'", total - valid.len(), path.display());
    }

    Ok(valid)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create '{}'", parent.display()))?;
    }
    Ok(())
}
