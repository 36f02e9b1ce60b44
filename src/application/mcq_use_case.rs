// ============================================================
// Layer 2 — McqUseCase
// ============================================================
// Generates a question set from a notes file:
//
//   Step 1: Load and clean notes        (Layer 4 - data)
//   Step 2: Generate questions          (Layer 5 - nlp)
//   Step 3: Optionally save as JSON     (Layer 6 - infra)
//
// With a seed the same notes always give the same quiz, which
// is what the saved JSON files are for.

use std::path::{Path, PathBuf};

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};

use crate::application::{config::StudyConfig, notes::load_clean_notes};
use crate::domain::question::{Difficulty, GeneratedQuestion};
use crate::domain::traits::RandomSource;
use crate::infra::export::save_questions;
use crate::nlp::mcq::generate_mcqs_from_text;

/// Settings for one `mcq` run
#[derive(Debug, Clone)]
pub struct McqRequest {
    pub notes: PathBuf,
    pub count: usize,
    pub seed:  Option<u64>,
    pub out:   Option<PathBuf>,
}

pub struct McqUseCase {
    request: McqRequest,
}

impl McqUseCase {
    pub fn new(request: McqRequest) -> Self {
        Self { request }
    }

    /// Build a request from the config, letting explicit values win
    pub fn request_from(
        config: &StudyConfig,
        notes:  PathBuf,
        count:  Option<usize>,
        seed:   Option<u64>,
        out:    Option<PathBuf>,
    ) -> McqRequest {
        McqRequest {
            notes,
            count: count.unwrap_or(config.mcq_count),
            seed,
            out,
        }
    }

    /// Generate the questions and save them if an output path was given
    pub fn execute(&self) -> Result<Vec<GeneratedQuestion>> {
        let req  = &self.request;
        let text = load_clean_notes(&req.notes)?;

        let questions = match req.seed {
            Some(seed) => generate(&text, req.count, &mut StdRng::seed_from_u64(seed)),
            None       => generate(&text, req.count, &mut rand::thread_rng()),
        };

        if let Some(out) = &req.out {
            save_questions(&questions, out)?;
        }

        Ok(questions)
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.request.out.as_deref()
    }
}

fn generate<R: RandomSource>(text: &str, count: usize, rng: &mut R) -> Vec<GeneratedQuestion> {
    let questions = generate_mcqs_from_text(text, count, rng);

    let by_band = |d: Difficulty| questions.iter().filter(|q| q.difficulty == d).count();
    tracing::info!(
        "Generated {} of {} requested questions ({} easy, {} medium, {} hard)",
        questions.len(),
        count,
        by_band(Difficulty::Easy),
        by_band(Difficulty::Medium),
        by_band(Difficulty::Hard),
    );

    if questions.len() < count {
        tracing::warn!("Notes were too short for {} questions", count);
    }
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::export::load_questions;
    use std::fs;
    use tempfile::tempdir;

    const NOTES: &str = "Photosynthesis is the process plants use to convert light into energy. \
        Chlorophyll absorbs sunlight. This process occurs in chloroplasts.";

    #[test]
    fn test_seeded_run_is_reproducible_and_saved() {
        let dir   = tempdir().unwrap();
        let notes = dir.path().join("notes.txt");
        let out   = dir.path().join("quiz.json");
        fs::write(&notes, NOTES).unwrap();

        let config  = StudyConfig::default();
        let request = McqUseCase::request_from(&config, notes.clone(), Some(3), Some(7), Some(out.clone()));
        let first   = McqUseCase::new(request.clone()).execute().unwrap();
        let second  = McqUseCase::new(request).execute().unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
        assert_eq!(load_questions(&out).unwrap(), first);
    }

    #[test]
    fn test_count_defaults_to_config() {
        let config  = StudyConfig { mcq_count: 4, ..Default::default() };
        let request = McqUseCase::request_from(&config, PathBuf::from("n.txt"), None, None, None);
        assert_eq!(request.count, 4);
        assert!(McqUseCase::new(request).output_path().is_none());
    }
}
