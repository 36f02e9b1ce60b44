// ============================================================
// Layer 2 — Notes Input
// ============================================================
// The first two steps every text command shares:
//
//   Step 1: Load the notes file or directory   (Layer 4 - data)
//   Step 2: Clean the text                     (Layer 4 - data)

use std::path::Path;

use anyhow::{bail, Result};

use crate::data::{loader::NotesLoader, preprocessor::NotesCleaner};

/// Load and clean the notes at `path`.
/// Notes that are empty after cleaning are an error.
pub fn load_clean_notes(path: &Path) -> Result<String> {
    let raw   = NotesLoader::new(path).load_text()?;
    let clean = NotesCleaner::new().clean(&raw);

    if clean.is_empty() {
        bail!("No study notes found in '{}'", path.display());
    }

    tracing::debug!(
        "Notes from '{}': {} words after cleaning",
        path.display(),
        clean.split_whitespace().count(),
    );
    Ok(clean)
}
