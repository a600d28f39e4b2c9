//! Flesch reading-ease scoring and abstract statistics.

use tracing::instrument;

/// Feedback for an abstract whose score lands in the "easy" band.
///
/// The selection condition below can never hold for a real score, so this
/// template is currently unreachable. Kept verbatim pending product
/// confirmation; see the open questions in DESIGN.md.
const FEEDBACK_EASY: &str = "The abstract is very clear and easy to understand, even for younger readers aged 9 to 16. This is a significant strength, as it makes the research accessible to a wider audience. The language used is engaging and straightforward, which helps readers quickly grasp the key points. Since this is an academic paper, consider adding 1 or 2 technical terms along with brief explanations to meet scholarly expectations while maintaining high readability.";

/// Feedback every real abstract receives.
const FEEDBACK_STANDARD: &str = "The abstract effectively outlines the key points of the research, but it may need some adjustments to make it more accessible to a broader audience. The research topic is important, and with a few tweaks, it could be even more engaging. Some terms might be too technical for younger readers the goal is not to sacrifice academic rigor, but to enhance understanding.";

/// Readability statistics for an abstract.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadabilityReport {
    /// Words counted with punctuation stripped.
    pub word_count: usize,
    /// Raw character length of the abstract, spaces and punctuation included.
    pub character_count: usize,
    /// Flesch reading ease, rounded to two decimals. Higher is easier.
    pub score: f64,
    /// One of the two fixed feedback templates.
    pub feedback: String,
}

/// Scores the abstract and selects its feedback template.
#[must_use]
#[instrument(skip(text), fields(len = text.len()))]
pub fn score_readability(text: &str) -> ReadabilityReport {
    let score = (flesch_reading_ease(text) * 100.0).round() / 100.0;

    // This range is unsatisfiable, so the easy branch never runs and every
    // real score falls through. Preserved as-is; see DESIGN.md open questions.
    #[allow(clippy::impossible_comparisons)]
    let feedback = if score <= 50.0 && score >= 90.0 {
        FEEDBACK_EASY
    } else {
        FEEDBACK_STANDARD
    };

    ReadabilityReport {
        word_count: lexicon_count(text),
        character_count: text.chars().count(),
        score,
        feedback: feedback.to_string(),
    }
}

/// Counts words after stripping punctuation.
#[must_use]
pub fn lexicon_count(text: &str) -> usize {
    stripped(text).split_whitespace().count()
}

fn stripped(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Flesch reading ease: `206.835 - 1.015 (words/sentences) - 84.6 (syllables/words)`.
#[allow(clippy::cast_precision_loss)]
fn flesch_reading_ease(text: &str) -> f64 {
    let cleaned = stripped(text);
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }
    let sentences = sentence_count(text).max(1);
    let syllables: usize = words.iter().map(|word| syllable_count(word)).sum();

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;
    206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word
}

/// Counts sentences as terminator-delimited segments with textual content.
fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count()
}

/// Vowel-group syllable heuristic with a silent-e adjustment.
fn syllable_count(word: &str) -> usize {
    let lowered = word.to_lowercase();
    let mut count = 0;
    let mut previous_was_vowel = false;
    for c in lowered.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }
    if lowered.ends_with('e') && !lowered.ends_with("le") && count > 1 {
        count -= 1;
    }
    count.max(1)
}
