// ============================================================
// Layer 5 — Definition and Formula Patterns
// ============================================================
// A small grammar of labelled patterns, tried in order.
// The first rule that matches a sentence (and passes its
// length checks) wins; later rules are not consulted.
//
// Definition rules (term is one or two words):
//   is            "Osmosis is the movement of water..."
//                 "Osmosis is defined as the movement..."
//   refers-to     "Entropy refers to the disorder of..."
//   means         "Velocity means speed in a direction..."
//   separator     "The nucleus: control centre of the cell"
//                 "Catalyst - a substance that speeds up..."
//
// Formula rules:
//   formula, equation, step, calculate  → keyword followed by content
//   assignment                          → "= ..." anywhere
//
// Sentences that contain a math symbol and are short are also
// treated as formulas, independently of the rules.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::summary::Definition;
use crate::nlp::text::{capitalize, char_len};

/// A term must be shorter than this to count as a definition
const MAX_TERM_CHARS: usize = 50;

/// A definition body must be longer than this
const MIN_DEFINITION_CHARS: usize = 10;

/// Symbol-bearing sentences must be shorter than this to count as formulas
const MAX_SYMBOL_SENTENCE_CHARS: usize = 150;

/// One named regular expression in an ordered rule table
pub struct LabeledPattern {
    pub label: &'static str,
    regex:     Regex,
}

impl LabeledPattern {
    fn new(label: &'static str, pattern: &str) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid built-in pattern '{label}': {e}"));
        Self { label, regex }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The first two capture groups, if the pattern matches
    fn capture_pair<'t>(&self, text: &'t str) -> Option<(&'t str, &'t str)> {
        let caps = self.regex.captures(text)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}

static DEFINITION_RULES: Lazy<Vec<LabeledPattern>> = Lazy::new(|| {
    vec![
        LabeledPattern::new("is",        r"(?i)^(\w+(?:\s+\w+)?)\s+is\s+(?:defined as\s+)?(.+)$"),
        LabeledPattern::new("refers-to", r"(?i)^(\w+(?:\s+\w+)?)\s+refers to\s+(.+)$"),
        LabeledPattern::new("means",     r"(?i)^(\w+(?:\s+\w+)?)\s+means\s+(.+)$"),
        LabeledPattern::new("separator", r"(?i)^(?:the\s+)?(\w+(?:\s+\w+)?)\s*[-:]\s*(.+)$"),
    ]
});

static FORMULA_RULES: Lazy<Vec<LabeledPattern>> = Lazy::new(|| {
    vec![
        LabeledPattern::new("formula",    r"(?i)formula[:\s]+(.+)"),
        LabeledPattern::new("equation",   r"(?i)equation[:\s]+(.+)"),
        LabeledPattern::new("step",       r"(?i)step\s*\d*[:\s]+(.+)"),
        LabeledPattern::new("calculate",  r"(?i)calculate[:\s]+(.+)"),
        LabeledPattern::new("assignment", r"=\s*[^.]+"),
    ]
});

static MATH_SYMBOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[+\-*/=<>≤≥∑∫√]").unwrap_or_else(|e| panic!("invalid math symbol pattern: {e}"))
});

/// Try the definition rules against one sentence.
/// Returns the matching rule's label and the capitalised pair.
pub fn match_definition(sentence: &str) -> Option<(&'static str, Definition)> {
    DEFINITION_RULES.iter().find_map(|rule| {
        let (term, body) = rule.capture_pair(sentence)?;
        if char_len(term) < MAX_TERM_CHARS && char_len(body) > MIN_DEFINITION_CHARS {
            Some((rule.label, Definition::new(capitalize(term), capitalize(body))))
        } else {
            None
        }
    })
}

/// Label of the first formula rule matching `sentence`
pub fn match_formula_rule(sentence: &str) -> Option<&'static str> {
    FORMULA_RULES
        .iter()
        .find(|rule| rule.is_match(sentence))
        .map(|rule| rule.label)
}

/// Short sentences containing an arithmetic or comparison symbol
pub fn has_math_symbol(sentence: &str) -> bool {
    MATH_SYMBOL.is_match(sentence) && char_len(sentence) < MAX_SYMBOL_SENTENCE_CHARS
}
