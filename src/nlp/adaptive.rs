// ============================================================
// Layer 5 — Adaptive Question Selector
// ============================================================
// Picks a quiz from a question pool, biased toward the band
// that matches how the learner did last time:
//
//   previous accuracy < 50%  → easy
//   previous accuracy < 75%  → medium
//   otherwise                → hard
//
// Up to 70% (rounded up) of the quiz comes from the target band
// and up to 30% (rounded down) from the rest, both in pool order.
// The selection is then shuffled and cut to `count`.
//
// If the pool is small the quiz is simply shorter; there is no
// error path.
//
// Within a quiz, next_difficulty steps one band up after a
// correct answer and one band down after a wrong one.

use rand::seq::SliceRandom;

use crate::domain::question::{Difficulty, GeneratedQuestion};
use crate::domain::traits::RandomSource;

const EASY_BELOW:   f64 = 50.0;
const MEDIUM_BELOW: f64 = 75.0;

const TARGET_SHARE: f64 = 0.7;
const OTHER_SHARE:  f64 = 0.3;

/// Difficulty band for a previous accuracy percentage
pub fn target_difficulty(previous_accuracy: f64) -> Difficulty {
    if previous_accuracy < EASY_BELOW {
        Difficulty::Easy
    } else if previous_accuracy < MEDIUM_BELOW {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

/// Select up to `count` questions weighted toward the learner's band.
pub fn select_adaptive_questions<R: RandomSource>(
    questions:         &[GeneratedQuestion],
    previous_accuracy: f64,
    count:             usize,
    rng:               &mut R,
) -> Vec<GeneratedQuestion> {
    let target = target_difficulty(previous_accuracy);

    let target_quota = (count as f64 * TARGET_SHARE).ceil() as usize;
    let other_quota  = (count as f64 * OTHER_SHARE).floor() as usize;

    let (matching, others): (Vec<&GeneratedQuestion>, Vec<&GeneratedQuestion>) =
        questions.iter().partition(|q| q.difficulty == target);

    let mut selected: Vec<GeneratedQuestion> = matching
        .into_iter()
        .take(target_quota)
        .chain(others.into_iter().take(other_quota))
        .cloned()
        .collect();

    tracing::debug!(
        "Adaptive selection: accuracy {:.1}% → {} band, {} of {} questions",
        previous_accuracy,
        target,
        selected.len().min(count),
        questions.len(),
    );

    selected.shuffle(rng);
    selected.truncate(count);
    selected
}

/// Step the difficulty after an answer, saturating at both ends.
///
///   correct:   easy → medium → hard → hard
///   incorrect: hard → medium → easy → easy
pub fn next_difficulty(current: Difficulty, was_correct: bool) -> Difficulty {
    match (current, was_correct) {
        (Difficulty::Easy,   true)  => Difficulty::Medium,
        (Difficulty::Medium, true)  => Difficulty::Hard,
        (Difficulty::Hard,   true)  => Difficulty::Hard,
        (Difficulty::Hard,   false) => Difficulty::Medium,
        (Difficulty::Medium, false) => Difficulty::Easy,
        (Difficulty::Easy,   false) => Difficulty::Easy,
    }
}
