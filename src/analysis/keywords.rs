//! Keyword extraction using single-document TF-IDF weighting.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use regex::Regex;
use stop_words::{LANGUAGE, get};
use tracing::instrument;

/// Maximum number of keywords returned per abstract.
pub const MAX_KEYWORDS: usize = 10;

/// Vocabulary cap applied before weighting: only the highest-count terms
/// are considered at all.
pub const MAX_VOCABULARY: usize = 50;

/// A term and its relative importance within the abstract.
///
/// Weights are L2-normalized, so each lands in `[0, 1]`; display rounds to
/// two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordScore {
    /// Lowercased term.
    pub term: String,
    /// Relative importance in `[0, 1]`.
    pub weight: f64,
}

impl KeywordScore {
    /// Weight formatted to two decimals for display.
    #[must_use]
    pub fn formatted_weight(&self) -> String {
        format!("{:.2}", self.weight)
    }

    /// `term:weight%` form used in the report listing and JSON output.
    #[must_use]
    pub fn as_percent(&self) -> String {
        format!("{}:{}%", self.term, self.formatted_weight())
    }
}

/// Keyword extractor over a one-document corpus.
///
/// With a corpus of a single document, inverse document frequency collapses
/// to the same constant for every term (`ln(2/2) + 1 = 1`), so ranking is
/// raw term frequency under L2 normalization. That degenerate weighting is
/// the defined behavior, not something to correct with a larger corpus.
pub struct KeywordExtractor {
    stop_words: HashSet<String>,
    token_pattern: Regex,
}

impl std::fmt::Debug for KeywordExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordExtractor").finish()
    }
}

impl KeywordExtractor {
    /// Creates a new extractor with English stop words.
    ///
    /// # Errors
    /// Returns error if the token pattern fails to compile.
    #[instrument]
    pub fn new() -> Result<Self> {
        let stop_words = get(LANGUAGE::English).into_iter().collect();
        // Tokens are runs of two or more word characters.
        let token_pattern =
            Regex::new(r"\b\w\w+\b").context("failed to compile keyword token pattern")?;
        Ok(Self {
            stop_words,
            token_pattern,
        })
    }

    /// Extracts up to [`MAX_KEYWORDS`] weighted keywords from the text.
    ///
    /// Terms are lowercased, stop words dropped, and the vocabulary capped to
    /// the [`MAX_VOCABULARY`] highest-count terms (count ties broken by term,
    /// ascending) before weighting. Weight ties keep sorted-term order.
    #[must_use]
    #[instrument(skip(self, text), fields(len = text.len()))]
    #[allow(clippy::cast_precision_loss)]
    pub fn extract(&self, text: &str) -> Vec<KeywordScore> {
        let lowered = text.to_lowercase();
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in self.token_pattern.find_iter(&lowered) {
            let term = token.as_str();
            if self.stop_words.contains(term) {
                continue;
            }
            *counts.entry(term.to_string()).or_default() += 1;
        }

        // Vocabulary cap: highest counts first, ties by term ascending.
        let mut vocabulary: Vec<(String, usize)> = counts.into_iter().collect();
        vocabulary.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        vocabulary.truncate(MAX_VOCABULARY);

        let norm = vocabulary
            .iter()
            .map(|(_, count)| (*count as f64).powi(2))
            .sum::<f64>()
            .sqrt();
        if norm == 0.0 {
            return Vec::new();
        }

        // Weight ties resolve by vocabulary iteration order: sorted terms.
        vocabulary.sort_by(|a, b| a.0.cmp(&b.0));
        let mut scores: Vec<KeywordScore> = vocabulary
            .into_iter()
            .map(|(term, count)| KeywordScore {
                term,
                weight: count as f64 / norm,
            })
            .collect();
        scores.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
        scores.truncate(MAX_KEYWORDS);
        scores
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn extractor() -> KeywordExtractor {
        KeywordExtractor::new().unwrap()
    }

    #[test]
    fn test_extractor_creates_successfully() {
        assert!(KeywordExtractor::new().is_ok());
    }

    #[test]
    fn test_extract_empty_input_returns_empty() {
        assert!(extractor().extract("").is_empty());
        assert!(extractor().extract("   ").is_empty());
    }

    #[test]
    fn test_extract_limits_to_ten_sorted_descending() {
        let text = "alpha alpha alpha beta beta gamma delta epsilon zeta eta theta iota kappa lambda photon neutron proton electron quark boson lepton hadron meson";
        let scores = extractor().extract(text);

        assert!(scores.len() <= MAX_KEYWORDS, "got {}", scores.len());
        for pair in scores.windows(2) {
            assert!(
                pair[0].weight >= pair[1].weight,
                "weights must be descending"
            );
        }
    }

    #[test]
    fn test_extract_weights_in_unit_interval() {
        let text = "network network network model model training data data data data";
        for score in extractor().extract(text) {
            assert!(score.weight > 0.0 && score.weight <= 1.0, "{score:?}");
        }
    }

    #[test]
    fn test_extract_most_frequent_term_ranks_first() {
        let text = "algorithm algorithm algorithm algorithm complexity complexity graph";
        let scores = extractor().extract(text);
        assert_eq!(scores[0].term, "algorithm");
    }

    #[test]
    fn test_extract_drops_stop_words_and_short_tokens() {
        let scores = extractor().extract("the and of a is algorithm");
        let terms: Vec<&str> = scores.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, vec!["algorithm"]);
    }

    #[test]
    fn test_extract_lowercases_terms() {
        let scores = extractor().extract("ALGORITHM Quantum MODEL quantum");
        assert!(scores.iter().all(|s| s.term == s.term.to_lowercase()));
    }

    #[test]
    fn test_weight_ties_keep_sorted_term_order() {
        // Four distinct terms, one occurrence each: all weights equal.
        let scores = extractor().extract("zebra apple mango kiwi");
        let terms: Vec<&str> = scores.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, vec!["apple", "kiwi", "mango", "zebra"]);
    }

    #[test]
    fn test_single_term_gets_full_weight() {
        let scores = extractor().extract("algorithm algorithm algorithm");
        assert_eq!(scores.len(), 1);
        assert!((scores[0].weight - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_formatting() {
        let score = KeywordScore {
            term: "algorithm".to_string(),
            weight: 0.534_21,
        };
        assert_eq!(score.formatted_weight(), "0.53");
        assert_eq!(score.as_percent(), "algorithm:0.53%");
    }
}
