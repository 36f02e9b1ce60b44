// ============================================================
// Layer 3 — Study Helper Domain Types
// ============================================================
// Plain data produced by the study helpers:
//   - StudyPlan / StudySession  → a timed schedule for one day
//   - Resource                  → an external learning link
//   - MotivationalFeedback      → message shown after a quiz

use serde::{Deserialize, Serialize};

// ─── Study plan ───────────────────────────────────────────────────────────────
/// What a slot in the schedule is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Study,
    Break,
    Review,
}

impl SessionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionKind::Study  => "study",
            SessionKind::Break  => "break",
            SessionKind::Review => "review",
        }
    }
}

/// One slot in the schedule, e.g. "9:00 AM - 9:45 AM"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub time:     String,
    pub activity: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub kind:     SessionKind,
}

/// A full day's plan for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub subject:     String,
    pub total_hours: f64,
    pub scenario:    String,
    pub sessions:    Vec<StudySession>,
    pub tips:        Vec<String>,
}

impl StudyPlan {
    /// Sessions that are not breaks
    pub fn study_sessions(&self) -> impl Iterator<Item = &StudySession> {
        self.sessions.iter().filter(|s| s.kind != SessionKind::Break)
    }
}

// ─── Resources ────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Web,
    Youtube,
    Article,
}

/// An external link recommended for a subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title:       String,
    pub url:         String,
    #[serde(rename = "type")]
    pub kind:        ResourceKind,
    pub description: String,
}

// ─── Feedback ─────────────────────────────────────────────────────────────────
/// Encouragement shown after a quiz attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotivationalFeedback {
    pub main_message:  String,
    pub emoji:         String,
    pub encouragement: String,
    pub tip:           String,
}
