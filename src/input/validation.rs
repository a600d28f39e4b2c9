//! Validation rules for user-submitted fields.

/// A confirmed set of user inputs, ready for analysis.
///
/// Immutable once returned by the collector; the single edit pass happens
/// inside the confirmation flow, before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Full name, uppercased.
    pub name: String,
    /// Research topic title, uppercased.
    pub research_topic: String,
    /// Abstract body, verbatim as pasted.
    pub abstract_text: String,
}

/// Minimum token count for an acceptable abstract.
pub const MIN_ABSTRACT_TOKENS: usize = 100;

/// Minimum length (exclusive) for an acceptable research topic.
pub const MIN_TOPIC_LENGTH: usize = 30;

/// Returns true when the name, with spaces removed, is non-empty and
/// purely alphabetic.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let stripped: String = name.chars().filter(|c| *c != ' ').collect();
    !stripped.is_empty() && stripped.chars().all(char::is_alphabetic)
}

/// Returns true when the topic is longer than [`MIN_TOPIC_LENGTH`] characters.
#[must_use]
pub fn is_valid_topic(topic: &str) -> bool {
    topic.chars().count() > MIN_TOPIC_LENGTH
}

/// Counts tokens by splitting on single literal spaces.
///
/// This deliberately splits only on `' '`: runs of spaces produce empty
/// tokens that still count, and tabs/newlines do not split at all. Abstract
/// acceptance is defined against this exact rule, so it must not be replaced
/// with a general whitespace splitter.
#[must_use]
pub fn abstract_token_count(text: &str) -> usize {
    text.split(' ').count()
}

/// Returns true when the abstract has at least [`MIN_ABSTRACT_TOKENS`] tokens
/// under the literal-space rule.
#[must_use]
pub fn is_valid_abstract(text: &str) -> bool {
    abstract_token_count(text) >= MIN_ABSTRACT_TOKENS
}
