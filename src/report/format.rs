//! Assembling the human-readable analysis report.

use serde::{Deserialize, Serialize};

use crate::analysis::{KeywordScore, ReadabilityReport};

/// The composed, read-only result of a full analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Classified discipline, or the no-match sentinel.
    pub discipline: String,
    /// Submitted name, uppercased.
    pub name: String,
    /// Submitted research topic, uppercased.
    pub research_topic: String,
    /// Readability statistics for the abstract.
    pub readability: ReadabilityReport,
    /// Top keywords, weight descending.
    pub keywords: Vec<KeywordScore>,
}

impl AnalysisReport {
    /// Keywords as `term:weight%` strings, in rank order.
    #[must_use]
    pub fn keyword_percentages(&self) -> Vec<String> {
        self.keywords.iter().map(KeywordScore::as_percent).collect()
    }

    /// Renders the fixed multi-line report template.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "\nTHE ACADEMIC CONFERENCE IS FOCUSED ON {discipline} DISCIPLINE\n\n    THIS IS THE ANALYSIS OF THE ABSTRACT PASTED FROM YOUR RESEARCH PAPER:\n            Username: {name}\n            Research Topic: {topic}\n            Total words in Abstract: {words}\n            Total characters in Abstract: {characters}\n            Abstract readability score: {score}\n            Abstract feedback: \n                        [{feedback}]\n            Abstract keywords: \n                    [{keywords}]",
            discipline = self.discipline.to_uppercase(),
            name = self.name,
            topic = self.research_topic,
            words = self.readability.word_count,
            characters = self.readability.character_count,
            score = self.readability.score,
            feedback = self.readability.feedback,
            keywords = self.keyword_percentages().join(", "),
        )
    }
}

/// JSON shape of a saved report.
///
/// Field order here defines key order in the output document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonReport {
    /// Submitted name.
    pub name: String,
    /// Submitted research topic.
    #[serde(rename = "research topic")]
    pub research_topic: String,
    /// Word count of the abstract.
    #[serde(rename = "total words")]
    pub total_words: usize,
    /// Raw character count of the abstract.
    #[serde(rename = "total characters")]
    pub total_characters: usize,
    /// Flesch reading ease, rounded to two decimals.
    #[serde(rename = "readability scores")]
    pub readability_scores: f64,
    /// Selected feedback template.
    pub feedback: String,
    /// Keywords as `term:weight%` strings.
    pub keywords: Vec<String>,
}

impl From<&AnalysisReport> for JsonReport {
    fn from(report: &AnalysisReport) -> Self {
        Self {
            name: report.name.clone(),
            research_topic: report.research_topic.clone(),
            total_words: report.readability.word_count,
            total_characters: report.readability.character_count,
            readability_scores: report.readability.score,
            feedback: report.readability.feedback.clone(),
            keywords: report.keyword_percentages(),
        }
    }
}
