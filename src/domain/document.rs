// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// A set of study notes loaded from disk, plus the kind of
// source the text originally came from.
//
// The loader has already extracted plain text by the time a
// Document exists, so nothing downstream cares whether the
// notes were a .txt, .md or .docx file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw study notes with their origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The filename, so results can be traced back
    pub source: String,

    /// Full extracted text before cleaning
    pub text: String,
}

impl Document {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// Number of whitespace-separated words in the raw text
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Where the text being summarised came from.
/// Only used to label the processing info of a structured summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Text,
    Pdf,
    Youtube,
}

impl SourceType {
    /// Human readable label shown in processing info
    pub fn label(self) -> &'static str {
        match self {
            SourceType::Text    => "Text Notes",
            SourceType::Pdf     => "PDF Document",
            SourceType::Youtube => "YouTube Video",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
