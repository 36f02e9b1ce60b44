// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Gets study notes off the disk and into a clean string:
//
//   .txt / .md / .docx
//       │
//       ▼
//   NotesLoader   → reads files, extracts raw text
//       │
//       ▼
//   NotesCleaner  → smart quotes, bullets, whitespace
//       │
//       ▼
//   nlp layer     → key terms, summaries, questions
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §13 (Iterators and Closures)

/// Loads .txt, .md and .docx notes from a file or directory
pub mod loader;

/// Normalises raw notes text
pub mod preprocessor;
