// ============================================================
// Layer 5b — Progress Analytics
// ============================================================
// Turns the recorded quiz history into reports:
//
//   subject_stats       → quizzes, questions, correct answers and
//                         mean accuracy per subject
//   performance_metrics → mean accuracy, skill level and trend
//   topic_stats         → accuracy and mastery per question topic
//   learning_path       → review weak topics, challenge strong ones
//   study_streak        → consecutive study days up to today
//
// Thresholds:
//   skill level   ≥ 80% advanced, ≥ 60% intermediate
//   trend         mean of the last 3 quizzes vs the first 3,
//                 ±10 points (needs more than 3 quizzes)
//   mastery       > 80% expert, > 50% intermediate
//   learning path topics with at least 3 answers:
//                 < 60% weak, > 80% strong
//
// Attempts are expected oldest first, as ProgressStore keeps them.

use std::collections::HashSet;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::domain::progress::{
    accuracy_percent, MasteryLevel, NextStep, PerformanceMetrics, QuizAttempt, SkillLevel,
    StepKind, SubjectStats, TopicStats, Trend,
};
use crate::domain::question::Difficulty;

const ADVANCED_FROM:     f64 = 80.0;
const INTERMEDIATE_FROM: f64 = 60.0;

const TREND_WINDOW: usize = 3;
const TREND_MARGIN: f64   = 10.0;

const EXPERT_ABOVE:       f64 = 80.0;
const PROFICIENT_ABOVE:   f64 = 50.0;

const MIN_TOPIC_ANSWERS: usize = 3;
const WEAK_BELOW:        f64   = 60.0;
const STRONG_ABOVE:      f64   = 80.0;
const PRACTICE_COUNT:    usize = 5;
const STARTER_TOPIC:     &str  = "General Knowledge";

// ─── Dashboard ────────────────────────────────────────────────────────────────
/// Per-subject totals, in the order subjects were first studied.
/// Subjects differing only in case are the same subject.
pub fn subject_stats(attempts: &[QuizAttempt]) -> Vec<SubjectStats> {
    let mut groups: IndexMap<String, Vec<&QuizAttempt>> = IndexMap::new();
    for attempt in attempts {
        groups.entry(attempt.subject.to_lowercase()).or_default().push(attempt);
    }

    groups
        .into_values()
        .map(|group| SubjectStats {
            subject:          group[0].subject.clone(),
            quizzes:          group.len(),
            questions:        group.iter().map(|a| a.total_questions).sum(),
            correct:          group.iter().map(|a| a.score).sum(),
            average_accuracy: mean(group.iter().map(|a| a.accuracy)),
        })
        .collect()
}

// ─── Performance ──────────────────────────────────────────────────────────────
pub fn performance_metrics(attempts: &[QuizAttempt]) -> PerformanceMetrics {
    let scores: Vec<f64> = attempts.iter().map(|a| a.accuracy).collect();
    let average = mean(scores.iter().copied());

    let level = if average >= ADVANCED_FROM {
        SkillLevel::Advanced
    } else if average >= INTERMEDIATE_FROM {
        SkillLevel::Intermediate
    } else {
        SkillLevel::Beginner
    };

    PerformanceMetrics {
        total_quizzes:    scores.len(),
        average_accuracy: average,
        level,
        trend:            trend(&scores),
    }
}

fn trend(scores: &[f64]) -> Trend {
    if scores.len() <= TREND_WINDOW {
        return Trend::Stable;
    }

    let first = mean(scores[..TREND_WINDOW].iter().copied());
    let last  = mean(scores[scores.len() - TREND_WINDOW..].iter().copied());

    if last > first + TREND_MARGIN {
        Trend::Improving
    } else if last < first - TREND_MARGIN {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

// ─── Topics ───────────────────────────────────────────────────────────────────
/// Answer statistics per question topic, in first-seen order
pub fn topic_stats(attempts: &[QuizAttempt]) -> Vec<TopicStats> {
    let mut stats: IndexMap<&str, TopicStats> = IndexMap::new();

    for answer in attempts.iter().flat_map(|a| &a.answers) {
        let s = stats.entry(answer.topic.as_str()).or_insert_with(|| TopicStats {
            topic:    answer.topic.clone(),
            attempts: 0,
            correct:  0,
            easy:     0,
            medium:   0,
            hard:     0,
            accuracy: 0.0,
            mastery:  MasteryLevel::Novice,
        });

        s.attempts += 1;
        if answer.correct {
            s.correct += 1;
        }
        match answer.difficulty {
            Difficulty::Easy   => s.easy += 1,
            Difficulty::Medium => s.medium += 1,
            Difficulty::Hard   => s.hard += 1,
        }
    }

    stats
        .into_values()
        .map(|mut s| {
            s.accuracy = accuracy_percent(s.correct, s.attempts);
            s.mastery  = mastery_for(s.accuracy);
            s
        })
        .collect()
}

fn mastery_for(accuracy: f64) -> MasteryLevel {
    if accuracy > EXPERT_ABOVE {
        MasteryLevel::Expert
    } else if accuracy > PROFICIENT_ABOVE {
        MasteryLevel::Intermediate
    } else {
        MasteryLevel::Novice
    }
}

/// Recommended next steps. Weak topics come first (a review and
/// an easy quiz each), then a hard quiz per strong topic. With
/// nothing to go on, a general starter quiz.
pub fn learning_path(topics: &[TopicStats]) -> Vec<NextStep> {
    let practised = || topics.iter().filter(|t| t.attempts >= MIN_TOPIC_ANSWERS);
    let mut steps = Vec::new();

    for t in practised().filter(|t| t.accuracy < WEAK_BELOW) {
        steps.push(NextStep {
            kind:       StepKind::Review,
            topic:      t.topic.clone(),
            difficulty: Difficulty::Easy,
            count:      None,
            reason:     "Score below 60%",
        });
        steps.push(NextStep {
            kind:       StepKind::Quiz,
            topic:      t.topic.clone(),
            difficulty: Difficulty::Easy,
            count:      Some(PRACTICE_COUNT),
            reason:     "Practice to improve",
        });
    }

    for t in practised().filter(|t| t.accuracy > STRONG_ABOVE) {
        steps.push(NextStep {
            kind:       StepKind::Quiz,
            topic:      t.topic.clone(),
            difficulty: Difficulty::Hard,
            count:      Some(PRACTICE_COUNT),
            reason:     "Mastery high, challenge yourself",
        });
    }

    if steps.is_empty() {
        steps.push(NextStep {
            kind:       StepKind::Quiz,
            topic:      STARTER_TOPIC.to_string(),
            difficulty: Difficulty::Medium,
            count:      Some(PRACTICE_COUNT),
            reason:     "Start your journey",
        });
    }

    steps
}

// ─── Streak ───────────────────────────────────────────────────────────────────
/// Consecutive days (UTC) with at least one quiz, counting back
/// from today. A streak survives until the end of the day after
/// the last quiz, so studying yesterday but not yet today still
/// counts.
pub fn study_streak(attempts: &[QuizAttempt], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = attempts.iter().map(|a| a.completed_at.date_naive()).collect();

    let mut day = if days.contains(&today) { Some(today) } else { today.pred_opt() };
    let mut streak = 0;

    while let Some(d) = day.filter(|d| days.contains(d)) {
        streak += 1;
        day = d.pred_opt();
    }
    streak
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}
