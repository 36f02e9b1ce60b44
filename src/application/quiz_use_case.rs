// ============================================================
// Layer 2 — QuizUseCase
// ============================================================
// Runs an adaptive quiz over a saved question set:
//
//   Step 1: Load questions JSON               (Layer 6 - infra)
//   Step 2: Look up previous accuracy         (Layer 6 - infra)
//   Step 3: Select a difficulty-biased quiz   (Layer 5 - nlp)
//   Step 4: Ask questions one by one          (QuizSession)
//   Step 5: Record the attempt, feedback      (Layer 6 / 5b)
//           and the study streak
//
// Within the quiz, each answer moves the current level one band
// up or down (next_difficulty), and the next question is the
// first remaining one at that level, or simply the next one
// if no question at that level is left.
//
// The CLI owns stdin/stdout; this layer only tracks state.

use std::path::PathBuf;

use anyhow::{bail, Result};

use chrono::Utc;

use crate::application::config::StudyConfig;
use crate::domain::progress::{AnswerRecord, QuizAttempt};
use crate::domain::question::{Difficulty, GeneratedQuestion};
use crate::domain::study::MotivationalFeedback;
use crate::domain::traits::RandomSource;
use crate::infra::{export::load_questions, metrics::AttemptLogger, progress_store::ProgressStore};
use crate::nlp::adaptive::{next_difficulty, select_adaptive_questions, target_difficulty};
use crate::study::{
    analytics::study_streak,
    feedback::{generate_motivational_feedback, streak_message},
};

/// Topic recorded for questions that carry none
const UNTAGGED_TOPIC: &str = "General";

// ─── QuizSession ──────────────────────────────────────────────────────────────
/// What happened when the learner answered one question
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub correct:        bool,
    pub correct_option: String,
    pub explanation:    Option<String>,
    /// Level the next question will be drawn from
    pub next_level:     Difficulty,
}

/// State of a quiz in progress
#[derive(Debug, Clone)]
pub struct QuizSession {
    remaining: Vec<GeneratedQuestion>,
    current:   Option<GeneratedQuestion>,
    level:     Difficulty,
    answers:   Vec<AnswerRecord>,
}

impl QuizSession {
    pub fn new(questions: Vec<GeneratedQuestion>, start_level: Difficulty) -> Self {
        Self {
            remaining: questions,
            current:   None,
            level:     start_level,
            answers:   Vec::new(),
        }
    }

    /// Move to the next question, preferring the current level.
    /// Returns None when the quiz is over.
    pub fn next_question(&mut self) -> Option<&GeneratedQuestion> {
        if self.remaining.is_empty() {
            self.current = None;
            return None;
        }

        let idx = self
            .remaining
            .iter()
            .position(|q| q.difficulty == self.level)
            .unwrap_or(0);

        self.current = Some(self.remaining.remove(idx));
        self.current.as_ref()
    }

    /// Answer the current question with option index `choice`
    pub fn answer(&mut self, choice: usize) -> Result<AnswerOutcome> {
        let Some(question) = self.current.take() else {
            bail!("No question is waiting for an answer");
        };

        let correct = question.is_correct(choice);
        self.answers.push(AnswerRecord {
            topic:      question.topic.clone().unwrap_or_else(|| UNTAGGED_TOPIC.to_string()),
            difficulty: question.difficulty,
            correct,
        });
        self.level = next_difficulty(self.level, correct);

        Ok(AnswerOutcome {
            correct,
            correct_option: question.correct_option().unwrap_or_default().to_string(),
            explanation:    question.explanation,
            next_level:     self.level,
        })
    }

    pub fn score(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }

    pub fn asked(&self) -> usize {
        self.answers.len()
    }

    /// Answers given so far, in order
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn level(&self) -> Difficulty {
        self.level
    }
}

// ─── QuizUseCase ──────────────────────────────────────────────────────────────
/// Everything the CLI needs to start asking questions
#[derive(Debug, Clone)]
pub struct PreparedQuiz {
    pub subject:           String,
    pub previous_accuracy: f64,
    pub session:           QuizSession,
    pub total:             usize,
}

/// Outcome of a finished quiz
#[derive(Debug, Clone)]
pub struct QuizReport {
    pub attempt:        QuizAttempt,
    pub feedback:       MotivationalFeedback,
    /// Consecutive study days, this quiz included
    pub streak:         u32,
    pub streak_message: String,
}

pub struct QuizUseCase {
    questions_path: PathBuf,
    subject:        String,
    count:          usize,
    data_dir:       PathBuf,
}

impl QuizUseCase {
    pub fn new(
        config:         &StudyConfig,
        questions_path: PathBuf,
        subject:        Option<&str>,
        count:          Option<usize>,
    ) -> Self {
        Self {
            questions_path,
            subject:  config.subject_or_default(subject),
            count:    count.unwrap_or(config.adaptive_count),
            data_dir: config.data_dir.clone(),
        }
    }

    /// Load the question set and pick this learner's quiz
    pub fn prepare<R: RandomSource>(&self, rng: &mut R) -> Result<PreparedQuiz> {
        let pool = load_questions(&self.questions_path)?;
        if pool.is_empty() {
            bail!("'{}' contains no usable questions", self.questions_path.display());
        }

        let previous_accuracy = ProgressStore::new(&self.data_dir).previous_accuracy(&self.subject)?;
        let start_level       = target_difficulty(previous_accuracy);
        let questions         = select_adaptive_questions(&pool, previous_accuracy, self.count, rng);

        tracing::info!(
            "Quiz on '{}': {} of {} questions, starting at {} (previous accuracy {:.0}%)",
            self.subject,
            questions.len(),
            pool.len(),
            start_level,
            previous_accuracy,
        );

        Ok(PreparedQuiz {
            subject: self.subject.clone(),
            previous_accuracy,
            total: questions.len(),
            session: QuizSession::new(questions, start_level),
        })
    }

    /// Store the attempt and build the feedback message
    pub fn finish<R: RandomSource>(&self, session: &QuizSession, rng: &mut R) -> Result<QuizReport> {
        let attempt = QuizAttempt::from_answers(self.subject.clone(), session.answers().to_vec());
        let store   = ProgressStore::new(&self.data_dir);

        store.record(&attempt)?;
        AttemptLogger::new(&self.data_dir)?.log(&attempt)?;
        let streak = study_streak(&store.load()?, Utc::now().date_naive());

        tracing::info!(
            "Recorded {}/{} ({:.0}%) for '{}'",
            attempt.score,
            attempt.total_questions,
            attempt.accuracy,
            attempt.subject,
        );

        let feedback = generate_motivational_feedback(&self.subject, session.score(), session.asked(), rng);
        Ok(QuizReport { attempt, feedback, streak, streak_message: streak_message(streak) })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::export::save_questions;
    use rand::{rngs::StdRng, SeedableRng};
    use tempfile::tempdir;

    fn question(n: usize, difficulty: Difficulty) -> GeneratedQuestion {
        GeneratedQuestion {
            question:       format!("Q{n}"),
            options:        vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: 0,
            difficulty,
            topic:          None,
            explanation:    Some(format!("because {n}")),
        }
    }

    #[test]
    fn test_session_follows_level() {
        let qs = vec![
            question(0, Difficulty::Hard),
            question(1, Difficulty::Easy),
            question(2, Difficulty::Medium),
        ];
        let mut s = QuizSession::new(qs, Difficulty::Easy);

        assert_eq!(s.next_question().unwrap().question, "Q1");
        let out = s.answer(0).unwrap();
        assert!(out.correct);
        assert_eq!(out.next_level, Difficulty::Medium);
        assert_eq!(out.explanation.as_deref(), Some("because 1"));

        assert_eq!(s.next_question().unwrap().question, "Q2");
        let out = s.answer(3).unwrap();
        assert!(!out.correct);
        assert_eq!(out.correct_option, "A");
        assert_eq!(out.next_level, Difficulty::Easy);

        // no easy question left, so the next one in order
        assert_eq!(s.next_question().unwrap().question, "Q0");
        s.answer(0).unwrap();
        assert!(s.next_question().is_none());

        assert_eq!(s.score(), 2);
        assert_eq!(s.asked(), 3);

        let levels: Vec<_> = s.answers().iter().map(|a| (a.difficulty, a.correct)).collect();
        assert_eq!(levels, vec![
            (Difficulty::Easy,   true),
            (Difficulty::Medium, false),
            (Difficulty::Hard,   true),
        ]);
    }

    #[test]
    fn test_answer_without_question_is_an_error() {
        let mut s = QuizSession::new(Vec::new(), Difficulty::Easy);
        assert!(s.answer(0).is_err());
    }

    #[test]
    fn test_full_quiz_records_progress() {
        let dir    = tempdir().unwrap();
        let qpath  = dir.path().join("quiz.json");
        let config = StudyConfig { data_dir: dir.path().join("data"), ..Default::default() };

        let pool: Vec<_> = (0..6)
            .map(|n| question(n, if n % 2 == 0 { Difficulty::Easy } else { Difficulty::Hard }))
            .collect();
        save_questions(&pool, &qpath).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let uc      = QuizUseCase::new(&config, qpath, Some("Biology"), Some(4));

        let mut quiz = uc.prepare(&mut rng).unwrap();
        assert_eq!(quiz.previous_accuracy, 0.0);
        assert_eq!(quiz.session.level(), Difficulty::Easy);
        assert_eq!(quiz.total, 4);

        let mut answered = 0;
        while quiz.session.next_question().is_some() {
            // right on the first two, wrong afterwards
            let choice = if answered < 2 { 0 } else { 1 };
            quiz.session.answer(choice).unwrap();
            answered += 1;
        }
        assert_eq!(answered, 4);

        let report = uc.finish(&quiz.session, &mut rng).unwrap();
        assert_eq!(report.attempt.accuracy, 50.0);
        assert_eq!(report.attempt.answers.len(), 4);
        assert!(report.attempt.answers.iter().all(|a| a.topic == "General"));
        assert!(!report.feedback.main_message.is_empty());
        assert_eq!(report.streak, 1);
        assert_eq!(report.streak_message, "🌱 Start building your study streak today!");

        let store = ProgressStore::new(&config.data_dir);
        assert_eq!(store.previous_accuracy("biology").unwrap(), 50.0);
        assert!(config.data_dir.join("attempts.csv").exists());

        // the next quiz starts one band higher
        let next = uc.prepare(&mut rng).unwrap();
        assert_eq!(next.session.level(), Difficulty::Medium);
    }

    #[test]
    fn test_empty_question_file_is_an_error() {
        let dir   = tempdir().unwrap();
        let qpath = dir.path().join("empty.json");
        save_questions(&[], &qpath).unwrap();

        let config = StudyConfig { data_dir: dir.path().to_path_buf(), ..Default::default() };
        let uc     = QuizUseCase::new(&config, qpath, None, None);
        assert!(uc.prepare(&mut StdRng::seed_from_u64(0)).is_err());
    }
}
