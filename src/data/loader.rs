// ============================================================
// Layer 4 — Notes Loader
// ============================================================
// Loads study notes from a single file or from every supported
// file in a directory (not recursive).
//
// Supported formats:
//   .txt, .md  → read as UTF-8
//   .docx      → parsed with docx-rs
//
// A .docx file is a ZIP archive of XML parts. docx-rs gives us
// a typed tree over the main document part:
//
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text
//
// Paragraph text is joined with newlines so that headings and
// bullet lines stay on their own lines for the cleaner.
//
// Errors:
//   - a path that doesn't exist is an error
//   - a single file with an unsupported extension is an error
//   - inside a directory, unsupported files are ignored and
//     unreadable ones are skipped with a warning
//
// Reference: docx-rs crate documentation
//            Rust Book §9 (Error Handling)

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context, Result};
use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// File formats the loader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesFormat {
    PlainText,
    Markdown,
    Docx,
}

impl NotesFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt"        => Some(NotesFormat::PlainText),
            "md" | "markdown" => Some(NotesFormat::Markdown),
            "docx"       => Some(NotesFormat::Docx),
            _            => None,
        }
    }
}

/// Loads notes from a file or directory.
/// Implements the DocumentSource trait from Layer 3.
pub struct NotesLoader {
    path: PathBuf,
}

impl NotesLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load everything and join it into one body of text,
    /// separated by blank lines
    pub fn load_text(&self) -> Result<String> {
        let docs = self.load_all()?;
        Ok(docs.into_iter().map(|d| d.text).collect::<Vec<_>>().join("\n\n"))
    }

    fn load_dir(&self) -> Result<Vec<Document>> {
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.path)
            .with_context(|| format!("Cannot read directory '{}'", self.path.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && NotesFormat::from_path(p).is_some())
            .collect();

        // read_dir order is platform dependent
        paths.sort();

        let mut docs = Vec::with_capacity(paths.len());
        for path in paths {
            match load_file(&path) {
                Ok(doc) => {
                    tracing::debug!("Loaded: {} ({} words)", doc.source, doc.word_count());
                    docs.push(doc);
                }
                // one bad file shouldn't sink the whole directory
                Err(e) => tracing::warn!("Skipping '{}': {:#}", path.display(), e),
            }
        }

        tracing::info!("Loaded {} notes files from '{}'", docs.len(), self.path.display());
        Ok(docs)
    }
}

impl DocumentSource for NotesLoader {
    fn load_all(&self) -> Result<Vec<Document>> {
        if !self.path.exists() {
            bail!("Notes path '{}' does not exist", self.path.display());
        }

        if self.path.is_dir() {
            return self.load_dir();
        }

        let doc = load_file(&self.path)?;
        tracing::info!("Loaded notes '{}' ({} words)", doc.source, doc.word_count());
        Ok(vec![doc])
    }
}

/// Read one notes file according to its extension
fn load_file(path: &Path) -> Result<Document> {
    let format = NotesFormat::from_path(path).ok_or_else(|| {
        anyhow!(
            "Unsupported notes file '{}' (expected .txt, .md or .docx)",
            path.display()
        )
    })?;

    let text = match format {
        NotesFormat::PlainText | NotesFormat::Markdown => fs::read_to_string(path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?,
        NotesFormat::Docx => read_docx_text(path)?,
    };

    let source = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(Document::new(source, text))
}

/// Extract paragraph text from a .docx file
fn read_docx_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let docx = read_docx(&bytes)
        .map_err(|e| anyhow!("docx-rs parse error in '{}': {:?}", path.display(), e))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _                              => None,
        })
        .filter(|text| !text.trim().is_empty())
        .collect();

    Ok(paragraphs.join("\n"))
}

/// Concatenate the text runs of one paragraph.
/// Runs split mid-word by formatting changes, so no separator is added.
fn paragraph_text(para: &Paragraph) -> String {
    para.children
        .iter()
        .filter_map(|child| match child {
            ParagraphChild::Run(run) => Some(run),
            _                        => None,
        })
        .flat_map(|run| run.children.iter())
        .filter_map(|rc| match rc {
            RunChild::Text(t) => Some(t.text.as_str()),
            _                 => None,
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_detection() {
        assert_eq!(NotesFormat::from_path(Path::new("a.TXT")), Some(NotesFormat::PlainText));
        assert_eq!(NotesFormat::from_path(Path::new("a.md")), Some(NotesFormat::Markdown));
        assert_eq!(NotesFormat::from_path(Path::new("a.docx")), Some(NotesFormat::Docx));
        assert_eq!(NotesFormat::from_path(Path::new("a.pdf")), None);
        assert_eq!(NotesFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_loads_single_text_file() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("cells.txt");
        fs::write(&path, "Cells divide by mitosis.").unwrap();

        let docs = NotesLoader::new(&path).load_all().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source, "cells.txt");
        assert_eq!(docs[0].text, "Cells divide by mitosis.");
    }

    #[test]
    fn test_directory_loads_supported_files_in_name_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.md"), "# Second").unwrap();
        fs::write(dir.path().join("a.txt"), "First").unwrap();
        fs::write(dir.path().join("image.png"), [0u8, 1, 2]).unwrap();

        let loader = NotesLoader::new(dir.path());
        let docs   = loader.load_all().unwrap();
        assert_eq!(docs.iter().map(|d| d.source.as_str()).collect::<Vec<_>>(), ["a.txt", "b.md"]);
        assert_eq!(loader.load_text().unwrap(), "First\n\n# Second");
    }

    #[test]
    fn test_broken_docx_in_directory_is_skipped() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.docx"), b"not a zip archive").unwrap();
        fs::write(dir.path().join("ok.txt"), "fine").unwrap();

        let docs = NotesLoader::new(dir.path()).load_all().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source, "ok.txt");
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let dir = tempdir().unwrap();
        let err = NotesLoader::new(dir.path().join("nope.txt")).load_all().unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_unsupported_single_file_is_an_error() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("slides.pdf");
        fs::write(&path, "%PDF").unwrap();
        assert!(NotesLoader::new(&path).load_all().is_err());
    }

    #[test]
    fn test_reads_docx_paragraphs() {
        use docx_rs::{Docx, Run};

        let dir  = tempdir().unwrap();
        let path = dir.path().join("notes.docx");
        let file = fs::File::create(&path).unwrap();
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Osmosis moves ")).add_run(Run::new().add_text("water.")))
            .add_paragraph(Paragraph::new())
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Diffusion moves solutes.")))
            .build()
            .pack(file)
            .unwrap();

        let docs = NotesLoader::new(&path).load_all().unwrap();
        assert_eq!(docs[0].text, "Osmosis moves water.\nDiffusion moves solutes.");
    }
}
