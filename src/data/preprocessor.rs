// ============================================================
// Layer 4 — Notes Cleaner
// ============================================================
// Normalises raw notes before they reach the NLP layer.
//
// Notes pasted from Word, web pages or slide decks carry:
//   - curly quotes and apostrophes ("smart quotes")
//   - en/em dashes and ellipsis characters
//   - bullet glyphs at the start of lines (•, ◦, ▪, -, *)
//   - non-breaking and zero-width spaces, tabs, \r
//
// The sentence splitter only knows about `.`, `!` and `?`, so a
// bullet list would otherwise run together into one long
// "sentence". Each bullet line therefore gets a closing period
// when it doesn't already end with sentence punctuation.
//
// Cleaning steps (applied in order):
//   1. Map typographic characters to plain ASCII
//   2. Strip bullet markers, terminating bullet lines
//   3. Collapse runs of spaces and trim each line
//   4. Allow at most one blank line between paragraphs

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r" {2,}").unwrap_or_else(|e| panic!("invalid space pattern: {e}"))
});

static BLANK_LINE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{3,}").unwrap_or_else(|e| panic!("invalid blank line pattern: {e}"))
});

/// Line-leading bullet: a glyph followed by at least one space
static BULLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[•◦▪‣●○■\-*]|\d{1,2}[.)])\s+")
        .unwrap_or_else(|e| panic!("invalid bullet pattern: {e}"))
});

#[derive(Debug, Clone, Copy)]
pub struct NotesCleaner {
    /// Append "." to bullet lines that lack sentence punctuation
    pub terminate_bullets: bool,
}

impl NotesCleaner {
    pub fn new() -> Self {
        Self { terminate_bullets: true }
    }

    /// Clean `text` for sentence splitting and tokenisation.
    pub fn clean(&self, text: &str) -> String {
        // ── Step 1: Typographic characters ───────────────────────────────────
        let mut plain = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '\u{2018}' | '\u{2019}' | '\u{201B}' => plain.push('\''),
                '\u{201C}' | '\u{201D}' | '\u{201F}' => plain.push('"'),
                '\u{2013}' | '\u{2014}' | '\u{2212}' => plain.push('-'),
                '\u{2026}'                           => plain.push_str("..."),
                '\u{00A0}' | '\u{200B}' | '\u{FEFF}' | '\t' => plain.push(' '),
                '\r'                                 => plain.push('\n'),
                c if c.is_control() && c != '\n'     => plain.push(' '),
                c                                    => plain.push(c),
            }
        }

        // ── Steps 2 and 3: Per-line cleanup ──────────────────────────────────
        let lines: Vec<String> = plain
            .lines()
            .map(|line| {
                let line       = SPACE_RUN.replace_all(line.trim(), " ");
                let bullet_end = BULLET.find(&line).map(|m| m.end());
                match bullet_end {
                    Some(end) => self.clean_bullet(&line[end..]),
                    None      => line.into_owned(),
                }
            })
            .collect();

        // ── Step 4: Blank lines ──────────────────────────────────────────────
        let joined = lines.join("\n");
        BLANK_LINE_RUN.replace_all(&joined, "\n\n").trim().to_string()
    }

    fn clean_bullet(&self, body: &str) -> String {
        let body = body.trim();
        if self.terminate_bullets && !body.is_empty() && !body.ends_with(['.', '!', '?', ':']) {
            format!("{body}.")
        } else {
            body.to_string()
        }
    }
}

impl Default for NotesCleaner {
    fn default() -> Self {
        Self::new()
    }
}
