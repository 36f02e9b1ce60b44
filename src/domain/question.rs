// ============================================================
// Layer 3 — Question Domain Types
// ============================================================
// A generated multiple-choice question and its difficulty band.
//
// Every question has exactly four options. The correct one is
// identified by its index rather than by its text, so the
// options can be displayed in any order the generator chose.
//
// Example:
//   question:       Complete the sentence: "_____ absorbs sunlight"
//   options:        ["Process", "Chlorophyll", "Plants", "Energy"]
//   correct_answer: 1
//
// Reference: Rust Book §5 (Structs), §6 (Enums and Pattern Matching)

use std::{fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Number of options every question carries
pub const OPTION_COUNT: usize = 4;

// ─── Difficulty ───────────────────────────────────────────────────────────────
/// Three-level difficulty band used for tagging and adaptive selection.
///
/// Ordering follows the escalation order: Easy < Medium < Hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy   => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard   => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy"   => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard"   => Ok(Difficulty::Hard),
            other    => bail!("unknown difficulty '{other}' (expected easy, medium or hard)"),
        }
    }
}

// ─── GeneratedQuestion ────────────────────────────────────────────────────────
/// One multiple-choice question produced from study notes.
///
/// Serialised with camelCase keys (`correctAnswer`) so question
/// files stay compatible with the web front-end's JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    /// The prompt shown to the learner
    pub question: String,

    /// Exactly four answer options
    pub options: Vec<String>,

    /// Index into `options` of the correct answer (0..=3)
    pub correct_answer: usize,

    /// Difficulty band, derived from the source sentence
    pub difficulty: Difficulty,

    /// The key term the question is about, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Why the correct answer is correct
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl GeneratedQuestion {
    /// The text of the correct option, if the index is in range
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }

    /// True when the question has four options and a valid answer index
    pub fn is_well_formed(&self) -> bool {
        self.options.len() == OPTION_COUNT && self.correct_answer < OPTION_COUNT
    }

    /// Check a learner's chosen option index
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GeneratedQuestion {
        GeneratedQuestion {
            question:       "Which gas do plants absorb?".to_string(),
            options:        vec!["Oxygen".into(), "Carbon".into(), "Nitrogen".into(), "Helium".into()],
            correct_answer: 1,
            difficulty:     Difficulty::Medium,
            topic:          Some("carbon".into()),
            explanation:    None,
        }
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_parses_case_insensitively() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(" easy ".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_correct_option() {
        let q = sample();
        assert_eq!(q.correct_option(), Some("Carbon"));
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        assert!(q.is_well_formed());
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"correctAnswer\":1"));
        assert!(json.contains("\"difficulty\":\"medium\""));
        assert!(!json.contains("explanation"));

        let back: GeneratedQuestion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
