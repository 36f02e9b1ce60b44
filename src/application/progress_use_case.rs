// ============================================================
// Layer 2 — ProgressUseCase
// ============================================================
// Reports on everything recorded by `quiz`:
//
//   Step 1: Load quiz history                      (Layer 6 - infra)
//   Step 2: Per-subject dashboard                  (Layer 5b - study)
//   Step 3: Level, trend, topic mastery, next steps (Layer 5b)
//   Step 4: Study streak over every subject        (Layer 5b)
//
// With --subject, steps 2–3 only look at that subject's quizzes.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;

use crate::application::config::StudyConfig;
use crate::domain::progress::{NextStep, PerformanceMetrics, SubjectStats, TopicStats};
use crate::infra::progress_store::ProgressStore;
use crate::study::{
    analytics::{learning_path, performance_metrics, study_streak, subject_stats, topic_stats},
    feedback::streak_message,
};

#[derive(Debug, Clone)]
pub struct ProgressReport {
    /// Subject filter, if one was given
    pub subject:        Option<String>,
    pub subjects:       Vec<SubjectStats>,
    pub metrics:        PerformanceMetrics,
    pub topics:         Vec<TopicStats>,
    pub next_steps:     Vec<NextStep>,
    pub streak:         u32,
    pub streak_message: String,
}

pub struct ProgressUseCase {
    data_dir: PathBuf,
    subject:  Option<String>,
}

impl ProgressUseCase {
    pub fn new(config: &StudyConfig, subject: Option<&str>) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            subject:  subject.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    /// Build the report as of `today` (used for the streak)
    pub fn execute(&self, today: NaiveDate) -> Result<ProgressReport> {
        let store = ProgressStore::new(&self.data_dir);

        // Step 1
        let everything = store.load()?;
        let mut attempts = match &self.subject {
            Some(subject) => store.history(subject)?,
            None          => everything.clone(),
        };
        attempts.sort_by_key(|a| a.completed_at);

        // Steps 2–3
        let topics = topic_stats(&attempts);

        // Step 4
        let streak = study_streak(&everything, today);

        let report = ProgressReport {
            subject:        self.subject.clone(),
            subjects:       subject_stats(&attempts),
            metrics:        performance_metrics(&attempts),
            next_steps:     learning_path(&topics),
            topics,
            streak,
            streak_message: streak_message(streak),
        };

        tracing::info!(
            "Progress from '{}': {} quizzes, {} topics, {}-day streak",
            store.path().display(),
            report.metrics.total_quizzes,
            report.topics.len(),
            report.streak,
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::progress::{AnswerRecord, QuizAttempt, SkillLevel, StepKind};
    use crate::domain::question::Difficulty;
    use chrono::Utc;
    use tempfile::tempdir;

    fn attempt(subject: &str, topic: &str, correct: usize, wrong: usize) -> QuizAttempt {
        let answers = (0..correct + wrong)
            .map(|i| AnswerRecord {
                topic:      topic.to_string(),
                difficulty: Difficulty::Medium,
                correct:    i < correct,
            })
            .collect();
        QuizAttempt::from_answers(subject, answers)
    }

    #[test]
    fn test_report_over_all_subjects() {
        let dir    = tempdir().unwrap();
        let config = StudyConfig { data_dir: dir.path().to_path_buf(), ..Default::default() };
        let store  = ProgressStore::new(dir.path());
        store.record(&attempt("Biology", "cells", 1, 3)).unwrap();
        store.record(&attempt("Physics", "force", 4, 0)).unwrap();

        let report = ProgressUseCase::new(&config, None)
            .execute(Utc::now().date_naive())
            .unwrap();

        assert_eq!(report.subject, None);
        assert_eq!(report.subjects.len(), 2);
        assert_eq!(report.metrics.total_quizzes, 2);
        assert_eq!(report.metrics.level, SkillLevel::Intermediate);
        assert_eq!(report.topics.len(), 2);

        let steps: Vec<(StepKind, &str)> =
            report.next_steps.iter().map(|s| (s.kind, s.topic.as_str())).collect();
        assert_eq!(steps, vec![
            (StepKind::Review, "cells"),
            (StepKind::Quiz,   "cells"),
            (StepKind::Quiz,   "force"),
        ]);

        assert_eq!(report.streak, 1);
        assert_eq!(report.streak_message, "🌱 Start building your study streak today!");
    }

    #[test]
    fn test_subject_filter() {
        let dir    = tempdir().unwrap();
        let config = StudyConfig { data_dir: dir.path().to_path_buf(), ..Default::default() };
        let store  = ProgressStore::new(dir.path());
        store.record(&attempt("Biology", "cells", 1, 3)).unwrap();
        store.record(&attempt("Physics", "force", 4, 0)).unwrap();

        let report = ProgressUseCase::new(&config, Some(" physics "))
            .execute(Utc::now().date_naive())
            .unwrap();

        assert_eq!(report.subject.as_deref(), Some("physics"));
        assert_eq!(report.subjects.len(), 1);
        assert_eq!(report.subjects[0].subject, "Physics");
        assert_eq!(report.metrics.average_accuracy, 100.0);
        assert_eq!(report.metrics.level, SkillLevel::Advanced);
        assert_eq!(report.topics.len(), 1);
    }

    #[test]
    fn test_empty_history() {
        let dir    = tempdir().unwrap();
        let config = StudyConfig { data_dir: dir.path().join("none"), ..Default::default() };

        let report = ProgressUseCase::new(&config, Some("Art"))
            .execute(Utc::now().date_naive())
            .unwrap();

        assert!(report.subjects.is_empty());
        assert_eq!(report.metrics.total_quizzes, 0);
        assert_eq!(report.next_steps.len(), 1);
        assert_eq!(report.next_steps[0].topic, "General Knowledge");
        assert_eq!(report.streak, 0);
    }
}
