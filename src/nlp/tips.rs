// ============================================================
// Layer 5 — Study Tips and Topic Grouping
// ============================================================
// Light-weight helpers shown next to a summary:
//   - generate_study_tips → up to five tips built from the notes
//   - cluster_topics      → groups key terms into k buckets
//
// cluster_topics is not real k-means: terms are sorted by length
// and cut into k contiguous chunks of ceil(n / k) terms.

use crate::nlp::text::{char_len, extract_key_terms, split_sentences};

const TIP_KEY_TERMS: usize = 5;
const MAX_TIPS:      usize = 5;

/// Notes with more sentences than this get a "break it down" tip
const CHUNKING_SENTENCE_THRESHOLD: usize = 5;

/// Up to five study tips for `text`.
pub fn generate_study_tips(text: &str, subject: &str) -> Vec<String> {
    let key_terms = extract_key_terms(text, TIP_KEY_TERMS);
    let mut tips  = Vec::with_capacity(MAX_TIPS + 2);

    if !key_terms.is_empty() {
        let top = key_terms.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
        tips.push(format!("Review key terms daily: {top}"));
    }

    tips.push(format!("Practice questions on {subject} concepts"));

    if key_terms.len() > 2 {
        tips.push(format!("Create flashcards for: {}, {}", key_terms[1], key_terms[2]));
    }

    tips.push("Summarize main ideas in your own words".to_string());
    tips.push("Test yourself before reviewing notes".to_string());

    let sentence_count = split_sentences(text).len();
    if sentence_count > CHUNKING_SENTENCE_THRESHOLD {
        tips.push(format!("Break down the {sentence_count} concepts into smaller chunks"));
    }

    tips.truncate(MAX_TIPS);
    tips
}

/// Group `terms` into at most `k` buckets of similar length.
///
/// With `k` or fewer terms every term gets its own bucket.
/// Empty buckets are never returned.
pub fn cluster_topics(terms: &[String], k: usize) -> Vec<Vec<String>> {
    if k == 0 {
        return Vec::new();
    }
    if terms.len() <= k {
        return terms.iter().map(|t| vec![t.clone()]).collect();
    }

    let mut sorted = terms.to_vec();
    // stable, so equal lengths keep their input order
    sorted.sort_by_key(|t| char_len(t));

    let chunk_size = terms.len().div_ceil(k);
    sorted.chunks(chunk_size).take(k).map(<[String]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_tips_for_rich_notes() {
        let text = "Enzymes speed up reactions in cells. Enzymes bind a substrate at the active site. \
            The substrate changes shape inside the enzyme. Temperature affects enzymes strongly. \
            Enzymes denature at high temperature levels. Each enzyme has an optimal pH value.";
        let tips = generate_study_tips(text, "Biology");

        assert_eq!(tips.len(), 5);
        assert!(tips[0].starts_with("Review key terms daily: enzymes"));
        assert_eq!(tips[1], "Practice questions on Biology concepts");
        assert!(tips[2].starts_with("Create flashcards for: "));
        // the sixth tip (chunking) is cut off by the cap
        assert!(!tips.iter().any(|t| t.starts_with("Break down")));
    }

    #[test]
    fn test_tips_for_empty_notes() {
        let tips = generate_study_tips("", "History");
        assert_eq!(
            tips,
            vec![
                "Practice questions on History concepts",
                "Summarize main ideas in your own words",
                "Test yourself before reviewing notes",
            ]
        );
    }

    #[test]
    fn test_cluster_small_input_is_one_per_group() {
        let terms = strings(&["atom", "ion"]);
        assert_eq!(cluster_topics(&terms, 3), vec![vec!["atom"], vec!["ion"]]);
    }

    #[test]
    fn test_cluster_groups_by_length() {
        let terms = strings(&["photosynthesis", "cell", "enzyme", "dna", "chlorophyll", "atp", "membrane"]);
        let groups = cluster_topics(&terms, 3);

        // chunk size ceil(7 / 3) = 3
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0], vec!["dna", "atp", "cell"]);
        assert_eq!(groups[1], vec!["enzyme", "membrane", "chlorophyll"]);
        assert_eq!(groups[2], vec!["photosynthesis"]);
    }

    #[test]
    fn test_cluster_never_returns_empty_groups() {
        // ceil(4 / 3) = 2, so only two groups are filled
        let terms = strings(&["a", "bb", "ccc", "dddd"]);
        let groups = cluster_topics(&terms, 3);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| !g.is_empty()));
    }
}
