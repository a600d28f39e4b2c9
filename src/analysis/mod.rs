//! Text analysis: keyword extraction and readability scoring.

mod keywords;
mod readability;

pub use keywords::{KeywordExtractor, KeywordScore, MAX_KEYWORDS, MAX_VOCABULARY};
pub use readability::{ReadabilityReport, score_readability};
