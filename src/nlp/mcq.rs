// ============================================================
// Layer 5 — MCQ Synthesizer
// ============================================================
// Generates multiple-choice questions from study notes in three
// passes, each filling whatever quota the previous left open:
//
//   1. Fill-in-the-blank
//      "Complete the sentence: "_____ absorbs sunlight""
//      The blank is the first key term found in the sentence.
//      Difficulty comes from the sentence's lexical complexity.
//
//   2. True / False (at most 30% of the requested count)
//      A coin flip decides whether the statement is kept as-is
//      or negated by inserting "not " before an interior word.
//
//   3. Key concept
//      "Which of the following is a key concept from the material?"
//      Walks the key terms no earlier question was about.
//
// The combined list is shuffled and cut to the requested count.
//
// Distractors:
//   1. other key terms of similar length (±3 characters)
//   2. any other content word from the notes
//   3. a fixed list of generic words
// Distractors are unique and never equal to the answer.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use regex::{Regex, RegexBuilder};

use crate::domain::question::{Difficulty, GeneratedQuestion};
use crate::domain::traits::RandomSource;
use crate::nlp::lexicon::{BLANK, GENERIC_DISTRACTORS, MIN_CONTENT_WORD_LEN};
use crate::nlp::text::{
    calculate_complexity, capitalize, char_len, extract_key_terms, is_word_char,
    remove_stopwords, split_sentences, tokenize,
};

/// Distractors per question (plus the answer makes four options)
pub const DISTRACTOR_COUNT: usize = 3;

/// Similar-length distractors differ from the answer by at most this
const SIMILAR_LENGTH_SLACK: usize = 3;

/// Minimum sentence length for a fill-in-the-blank question
const MIN_BLANK_SENTENCE_CHARS: usize = 30;

/// True/false statements must be strictly between these lengths
const TRUE_FALSE_MIN_CHARS: usize = 40;
const TRUE_FALSE_MAX_CHARS: usize = 150;

/// Share of the requested count given to true/false questions
const TRUE_FALSE_SHARE: f64 = 0.3;

/// Characters of a sentence used to detect that it was already asked about
const REUSE_PREFIX_CHARS: usize = 20;

const TRUE_FALSE_OPTIONS: [&str; 4] = ["True", "False", "Partially True", "Cannot be determined"];

const KEY_CONCEPT_PROMPTS: [&str; 3] = [
    "Which of the following is a key concept from the material?",
    "Which term is most relevant to the topic discussed?",
    "Identify the important term mentioned in the text:",
];

static NEGATABLE_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+").unwrap_or_else(|e| panic!("invalid word pattern: {e}"))
});

/// Pick exactly three wrong answers for `term`.
///
/// `key_terms` are tried first (similar length only), then every
/// content word in `all_terms`, then the generic fallback list.
pub fn generate_distractors(term: &str, key_terms: &[String], all_terms: &[String]) -> Vec<String> {
    let term_len = char_len(term);
    let mut distractors: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT);

    // 1. Similar-length key terms
    for candidate in key_terms {
        if char_len(candidate).abs_diff(term_len) <= SIMILAR_LENGTH_SLACK {
            push_unique(&mut distractors, candidate, term);
        }
    }

    // 2. Any other content word from the notes
    for candidate in all_terms {
        if char_len(candidate) > MIN_CONTENT_WORD_LEN {
            push_unique(&mut distractors, candidate, term);
        }
    }

    // 3. Generic words, in order
    for candidate in GENERIC_DISTRACTORS {
        push_unique(&mut distractors, candidate, term);
    }

    distractors
}

fn push_unique(out: &mut Vec<String>, candidate: &str, answer: &str) {
    if out.len() < DISTRACTOR_COUNT && candidate != answer && !out.iter().any(|d| d == candidate) {
        out.push(candidate.to_string());
    }
}

/// Generate up to `count` questions from `text`.
pub fn generate_mcqs_from_text<R: RandomSource>(
    text:  &str,
    count: usize,
    rng:   &mut R,
) -> Vec<GeneratedQuestion> {
    let sentences  = split_sentences(text);
    let key_terms  = extract_key_terms(text, (count * 2).max(20));
    let all_tokens = remove_stopwords(&tokenize(text));

    let mut questions: Vec<GeneratedQuestion> = Vec::with_capacity(count);

    fill_in_the_blank_pass(&sentences, &key_terms, &all_tokens, count, &mut questions, rng);
    let after_blanks = questions.len();

    true_false_pass(&sentences, count, &mut questions, rng);
    let after_true_false = questions.len();

    key_concept_pass(&key_terms, &all_tokens, count, &mut questions, rng);

    tracing::debug!(
        "Generated {} fill-in-the-blank, {} true/false, {} key-concept questions",
        after_blanks,
        after_true_false - after_blanks,
        questions.len() - after_true_false,
    );

    questions.shuffle(rng);
    questions.truncate(count);
    questions
}

// ─── Pass 1: Fill in the blank ────────────────────────────────────────────────
fn fill_in_the_blank_pass<R: RandomSource>(
    sentences:  &[String],
    key_terms:  &[String],
    all_tokens: &[String],
    count:      usize,
    questions:  &mut Vec<GeneratedQuestion>,
    rng:        &mut R,
) {
    let key_set: HashSet<&str> = key_terms.iter().map(String::as_str).collect();

    for sentence in sentences {
        if questions.len() >= count {
            break;
        }
        if char_len(sentence) < MIN_BLANK_SENTENCE_CHARS {
            continue;
        }

        let tokens = tokenize(sentence);
        let Some(target) = tokens.iter().find(|t| key_set.contains(t.as_str())) else {
            continue;
        };

        let prompt      = blank_out(sentence, target);
        let distractors = generate_distractors(target, key_terms, all_tokens);
        let (options, correct_answer) = place_answer(distractors, target, rng);

        questions.push(GeneratedQuestion {
            question:       format!("Complete the sentence: \"{prompt}\""),
            options,
            correct_answer,
            difficulty:     calculate_complexity(sentence),
            topic:          Some(target.clone()),
            explanation:    Some(format!(
                "The correct answer is \"{target}\" because it fits the context of the original statement."
            )),
        });
    }
}

/// Replace every whole-word, case-insensitive occurrence of `term` with
/// the blank. Word edges use the same character class as `tokenize`, so
/// every token it produced can be blanked.
fn blank_out(sentence: &str, term: &str) -> String {
    let Ok(re) = RegexBuilder::new(&regex::escape(term)).case_insensitive(true).build() else {
        return sentence.to_string();
    };

    let mut out  = String::with_capacity(sentence.len());
    let mut last = 0;
    for m in re.find_iter(sentence) {
        let before = sentence[..m.start()].chars().next_back();
        let after  = sentence[m.end()..].chars().next();
        if before.is_some_and(is_word_char) || after.is_some_and(is_word_char) {
            continue;
        }
        out.push_str(&sentence[last..m.start()]);
        out.push_str(BLANK);
        last = m.end();
    }
    out.push_str(&sentence[last..]);
    out
}

// ─── Pass 2: True / False ─────────────────────────────────────────────────────
fn true_false_pass<R: RandomSource>(
    sentences: &[String],
    count:     usize,
    questions: &mut Vec<GeneratedQuestion>,
    rng:       &mut R,
) {
    if questions.len() >= count {
        return;
    }

    let limit = (count as f64 * TRUE_FALSE_SHARE).ceil() as usize;

    let candidates: Vec<&String> = sentences
        .iter()
        .filter(|s| {
            let len = char_len(s);
            len > TRUE_FALSE_MIN_CHARS && len < TRUE_FALSE_MAX_CHARS && !already_asked(s, questions)
        })
        .take(limit)
        .collect();

    for sentence in candidates {
        if questions.len() >= count {
            break;
        }

        let keep_true = rng.gen_bool(0.5);
        let (statement, is_true) = if keep_true {
            (sentence.clone(), true)
        } else {
            match negate(sentence, rng) {
                Some(negated) => (negated, false),
                // nothing to negate, so the statement stays true
                None          => (sentence.clone(), true),
            }
        };

        let topic = extract_key_terms(sentence, 1)
            .into_iter()
            .next()
            .unwrap_or_else(|| "General".to_string());

        let explanation = if is_true {
            "This statement accurately reflects the information from the source material."
        } else {
            "This statement contains a modification that makes it incorrect."
        };

        questions.push(GeneratedQuestion {
            question:       format!("Is the following statement correct? \"{statement}\""),
            options:        TRUE_FALSE_OPTIONS.iter().map(|o| o.to_string()).collect(),
            correct_answer: if is_true { 0 } else { 1 },
            difficulty:     Difficulty::Easy,
            topic:          Some(topic),
            explanation:    Some(explanation.to_string()),
        });
    }
}

/// True when an existing question already quotes the start of `sentence`
fn already_asked(sentence: &str, questions: &[GeneratedQuestion]) -> bool {
    let prefix: String = sentence.chars().take(REUSE_PREFIX_CHARS).collect();
    questions.iter().any(|q| q.question.contains(&prefix))
}

/// Insert "not " before a random interior word longer than two characters.
/// Returns None when the sentence has no such word.
fn negate<R: RandomSource>(sentence: &str, rng: &mut R) -> Option<String> {
    let eligible: Vec<(usize, usize)> = NEGATABLE_WORD
        .find_iter(sentence)
        .skip(1)
        .filter(|m| char_len(m.as_str()) > MIN_CONTENT_WORD_LEN)
        .map(|m| (m.start(), m.end()))
        .collect();

    if eligible.is_empty() {
        return None;
    }

    let (start, _) = eligible[rng.gen_range(0..eligible.len())];
    let mut negated = String::with_capacity(sentence.len() + 4);
    negated.push_str(&sentence[..start]);
    negated.push_str("not ");
    negated.push_str(&sentence[start..]);
    Some(negated)
}

// ─── Pass 3: Key concept ──────────────────────────────────────────────────────
fn key_concept_pass<R: RandomSource>(
    key_terms:  &[String],
    all_tokens: &[String],
    count:      usize,
    questions:  &mut Vec<GeneratedQuestion>,
    rng:        &mut R,
) {
    let asked: HashSet<String> = questions.iter().filter_map(|q| q.topic.clone()).collect();
    let unused: Vec<&String>   = key_terms.iter().filter(|t| !asked.contains(*t)).collect();

    for term in unused {
        if questions.len() >= count {
            break;
        }
        let idx         = questions.len();
        let distractors = generate_distractors(term, key_terms, all_tokens);
        let (options, correct_answer) = place_answer(distractors, term, rng);

        questions.push(GeneratedQuestion {
            question:       KEY_CONCEPT_PROMPTS[idx % KEY_CONCEPT_PROMPTS.len()].to_string(),
            options,
            correct_answer,
            difficulty:     Difficulty::Easy,
            topic:          Some(term.clone()),
            explanation:    Some(format!(
                "\"{term}\" is explicitly mentioned and emphasized in the source material."
            )),
        });
    }
}

/// Insert the answer among the distractors at a random position and
/// capitalise every option. Returns the options and the answer index.
fn place_answer<R: RandomSource>(
    distractors: Vec<String>,
    answer:      &str,
    rng:         &mut R,
) -> (Vec<String>, usize) {
    let mut options = distractors;
    let position    = rng.gen_range(0..=options.len());
    options.insert(position, answer.to_string());
    (options.iter().map(|o| capitalize(o)).collect(), position)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const PHOTOSYNTHESIS: &str = "Photosynthesis is the process plants use to convert light \
        into energy. Chlorophyll absorbs sunlight. This process occurs in chloroplasts.";

    const HISTORY: &str = "The Roman Empire expanded across the Mediterranean over several centuries. \
        Julius Caesar crossed the Rubicon river with his loyal legions. \
        The Senate feared that Caesar would become a permanent dictator. \
        Augustus became the first emperor after years of civil war. \
        Roman roads connected distant provinces to the capital city. \
        Latin remained the language of law and administration for centuries.";

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_distractors_prefer_similar_length_key_terms() {
        let key_terms = strings(&["photosynthesis", "chlorophyll", "chloroplasts", "process", "light"]);
        let all       = strings(&["process", "plants", "light"]);
        let d = generate_distractors("photosynthesis", &key_terms, &all);
        assert_eq!(d, vec!["chlorophyll", "chloroplasts", "process"]);
    }

    #[test]
    fn test_distractors_fall_back_to_generics() {
        let d = generate_distractors("cell", &[], &[]);
        assert_eq!(d, vec!["various", "multiple", "different"]);
    }

    #[test]
    fn test_distractors_are_unique_and_exclude_answer() {
        let all = strings(&["atom", "atom", "atom", "various", "cell"]);
        let d   = generate_distractors("cell", &strings(&["cell"]), &all);
        assert_eq!(d, vec!["atom", "various", "multiple"]);
    }

    #[test]
    fn test_blank_out_is_whole_word_and_case_insensitive() {
        let out = blank_out("Process the processed data; PROCESS again", "process");
        assert_eq!(out, "_____ the processed data; _____ again");
    }

    #[test]
    fn test_blank_out_treats_combining_marks_as_word_edges() {
        // "cafe" + U+0301 tokenizes to "cafe", so the blank must cover it
        let sentence = "The cafe\u{301} opens early and every cafe\u{301} is busy";
        assert_eq!(tokenize("cafe\u{301}"), vec!["cafe"]);
        assert_eq!(
            blank_out(sentence, "cafe"),
            "The _____\u{301} opens early and every _____\u{301} is busy",
        );
    }

    #[test]
    fn test_blank_out_keeps_longer_words() {
        assert_eq!(blank_out("Cells and cell_walls", "cell"), "Cells and cell_walls");
    }

    #[test]
    fn test_photosynthesis_example_gives_three_questions() {
        let mut rng = StdRng::seed_from_u64(11);
        let qs = generate_mcqs_from_text(PHOTOSYNTHESIS, 3, &mut rng);

        assert_eq!(qs.len(), 3);
        for q in &qs {
            assert!(q.is_well_formed(), "malformed: {q:?}");
        }

        let blanks: Vec<_> = qs.iter().filter(|q| q.question.starts_with("Complete")).collect();
        assert_eq!(blanks.len(), 2);
        for q in blanks {
            let topic = q.topic.as_deref().unwrap();
            assert_eq!(q.correct_option().unwrap(), capitalize(topic));
            assert!(q.question.contains(BLANK));
            assert!(!q.question.to_lowercase().contains(topic));
        }

        let tf: Vec<_> = qs.iter().filter(|q| q.question.starts_with("Is the following")).collect();
        assert_eq!(tf.len(), 1);
        assert_eq!(tf[0].options, TRUE_FALSE_OPTIONS.to_vec());
        assert!(tf[0].correct_answer <= 1);
    }

    #[test]
    fn test_count_is_an_upper_bound() {
        for count in [0, 1, 4, 10, 25] {
            let mut rng = StdRng::seed_from_u64(count as u64);
            let qs = generate_mcqs_from_text(HISTORY, count, &mut rng);
            assert!(qs.len() <= count);
            assert!(qs.iter().all(GeneratedQuestion::is_well_formed));
        }
    }

    #[test]
    fn test_exactly_one_option_is_the_answer() {
        let mut rng = StdRng::seed_from_u64(5);
        for q in generate_mcqs_from_text(HISTORY, 20, &mut rng) {
            let answer = q.correct_option().unwrap().to_string();
            let hits   = q.options.iter().filter(|o| **o == answer).count();
            assert_eq!(hits, 1, "duplicate answer text in {q:?}");
        }
    }

    #[test]
    fn test_true_false_answer_matches_statement() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for q in generate_mcqs_from_text(HISTORY, 10, &mut rng) {
                if !q.question.starts_with("Is the following") {
                    continue;
                }
                let negated = q.question.contains("not ");
                assert_eq!(q.correct_answer, if negated { 1 } else { 0 });
            }
        }
    }

    #[test]
    fn test_key_concept_pass_fills_remaining_quota() {
        // no sentence is long enough for the first two passes
        let text = "Mitochondria. Ribosomes. Chloroplasts. Nucleus. Vacuole.";
        let mut rng = StdRng::seed_from_u64(2);
        let qs = generate_mcqs_from_text(text, 4, &mut rng);
        assert_eq!(qs.len(), 4);
        assert!(qs.iter().all(|q| q.difficulty == Difficulty::Easy));
        assert!(qs.iter().all(|q| KEY_CONCEPT_PROMPTS.contains(&q.question.as_str())));
    }

    #[test]
    fn test_key_concepts_skip_terms_already_asked() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let qs      = generate_mcqs_from_text(HISTORY, 25, &mut rng);

            let concepts: Vec<&GeneratedQuestion> = qs
                .iter()
                .filter(|q| KEY_CONCEPT_PROMPTS.contains(&q.question.as_str()))
                .collect();
            assert!(!concepts.is_empty());

            for q in concepts {
                let topic   = q.topic.as_deref().unwrap();
                let sharing = qs.iter().filter(|o| o.topic.as_deref() == Some(topic)).count();
                assert_eq!(sharing, 1, "topic '{topic}' asked twice (seed {seed})");
            }
        }
    }

    #[test]
    fn test_key_concepts_stop_when_terms_run_out() {
        let text = "Mitochondria. Ribosomes. Chloroplasts.";
        let mut rng = StdRng::seed_from_u64(3);
        let qs = generate_mcqs_from_text(text, 10, &mut rng);
        assert_eq!(qs.len(), 3);

        let mut topics: Vec<_> = qs.iter().filter_map(|q| q.topic.clone()).collect();
        topics.sort();
        assert_eq!(topics, vec!["chloroplasts", "mitochondria", "ribosomes"]);
    }

    #[test]
    fn test_same_seed_same_quiz() {
        let a = generate_mcqs_from_text(HISTORY, 8, &mut StdRng::seed_from_u64(99));
        let b = generate_mcqs_from_text(HISTORY, 8, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_text_gives_no_questions() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_mcqs_from_text("", 5, &mut rng).is_empty());
    }
}
