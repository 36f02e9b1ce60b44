// ============================================================
// Layer 3 — Quiz Progress Domain Types
// ============================================================
// A completed quiz and the reports built from quiz history.
//
//   QuizAttempt        → one quiz, with the answer to each question
//   SubjectStats       → per-subject totals (the dashboard)
//   PerformanceMetrics → average accuracy, skill level and trend
//   TopicStats         → accuracy and mastery per question topic
//   NextStep           → what to review or practise next
//
// The most recent attempt's accuracy for a subject drives the
// difficulty band of the next quiz.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::question::Difficulty;

// ─── QuizAttempt ──────────────────────────────────────────────────────────────
/// How one question of a quiz went
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub topic:      String,
    pub difficulty: Difficulty,
    pub correct:    bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub subject:         String,
    pub score:           usize,
    pub total_questions: usize,

    /// Percentage in [0, 100]
    pub accuracy:        f64,

    pub completed_at:    DateTime<Utc>,

    /// Per-question results. Empty in files written before
    /// answers were recorded.
    #[serde(default)]
    pub answers:         Vec<AnswerRecord>,
}

impl QuizAttempt {
    /// Build an attempt stamped with the current time.
    /// An empty quiz has 0% accuracy rather than NaN.
    pub fn new(subject: impl Into<String>, score: usize, total_questions: usize) -> Self {
        Self {
            subject:         subject.into(),
            score,
            total_questions,
            accuracy:        accuracy_percent(score, total_questions),
            completed_at:    Utc::now(),
            answers:         Vec::new(),
        }
    }

    /// Build an attempt whose score and total come from `answers`
    pub fn from_answers(subject: impl Into<String>, answers: Vec<AnswerRecord>) -> Self {
        let score = answers.iter().filter(|a| a.correct).count();
        let total = answers.len();
        Self { answers, ..Self::new(subject, score, total) }
    }
}

/// `score / total * 100`, or 0 when there were no questions
pub fn accuracy_percent(score: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        score as f64 / total as f64 * 100.0
    }
}

// ─── Dashboard ────────────────────────────────────────────────────────────────
/// Totals for one subject across all of its attempts
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectStats {
    pub subject:          String,
    pub quizzes:          usize,
    pub questions:        usize,
    pub correct:          usize,
    /// Mean of the per-quiz accuracies, in percent
    pub average_accuracy: f64,
}

// ─── Performance ──────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner     => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced     => "advanced",
        }
    }
}

/// Direction of the latest quizzes compared with the first ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Stable    => "stable",
            Trend::Declining => "declining",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetrics {
    pub total_quizzes:    usize,
    pub average_accuracy: f64,
    pub level:            SkillLevel,
    pub trend:            Trend,
}

// ─── Topics and learning path ─────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasteryLevel {
    Novice,
    Intermediate,
    Expert,
}

impl MasteryLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            MasteryLevel::Novice       => "Novice",
            MasteryLevel::Intermediate => "Intermediate",
            MasteryLevel::Expert       => "Expert",
        }
    }
}

/// Answers on one question topic, across every attempt
#[derive(Debug, Clone, PartialEq)]
pub struct TopicStats {
    pub topic:    String,
    pub attempts: usize,
    pub correct:  usize,
    pub easy:     usize,
    pub medium:   usize,
    pub hard:     usize,
    /// Percentage in [0, 100]
    pub accuracy: f64,
    pub mastery:  MasteryLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Review,
    Quiz,
}

impl StepKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Review => "review",
            StepKind::Quiz   => "quiz",
        }
    }
}

/// One recommendation on the learning path
#[derive(Debug, Clone, PartialEq)]
pub struct NextStep {
    pub kind:       StepKind,
    pub topic:      String,
    pub difficulty: Difficulty,
    /// Questions to practise, for quiz steps
    pub count:      Option<usize>,
    pub reason:     &'static str,
}
