//! Keyword-to-discipline classification.

use std::path::Path;

use tracing::{debug, instrument};

use crate::analysis::KeywordScore;
use crate::classify::{ClassifyError, DisciplineTable};

/// Returned when no extracted keyword appears in any discipline's list.
///
/// Callers display this like a discipline name; uppercasing it is allowed.
pub const NO_MATCH_SENTINEL: &str = "No matching disciplines found for the top keywords.";

/// Classifies extracted keywords into a discipline.
///
/// The table is re-read from `table_path` on every invocation. Each keyword
/// is tested, in rank order, against every discipline's keyword list in table
/// row order; the first discipline ever found to contain a match wins,
/// regardless of how many matches later disciplines accumulate. With no match
/// at all, [`NO_MATCH_SENTINEL`] is returned in place of a discipline name.
///
/// # Errors
/// Returns [`ClassifyError`] if the table cannot be loaded.
#[instrument(skip(keywords), fields(keywords = keywords.len()))]
pub fn classify(table_path: &Path, keywords: &[KeywordScore]) -> Result<String, ClassifyError> {
    let table = DisciplineTable::load(table_path)?;

    let mut matched: Vec<&str> = Vec::new();
    for keyword in keywords {
        for (discipline, list) in table.entries() {
            if list.iter().any(|entry| *entry == keyword.term) && !matched.contains(&discipline) {
                matched.push(discipline);
            }
        }
    }

    match matched.first() {
        Some(discipline) => {
            debug!(discipline, "classification matched");
            Ok((*discipline).to_string())
        }
        None => {
            debug!("no discipline matched the extracted keywords");
            Ok(NO_MATCH_SENTINEL.to_string())
        }
    }
}
