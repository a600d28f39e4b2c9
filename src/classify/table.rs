//! Loading the discipline keyword table from CSV.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::classify::ClassifyError;

/// One table row: a discipline paired with a single keyword.
#[derive(Debug, Deserialize)]
struct TableRow {
    #[serde(rename = "Discipline")]
    discipline: String,
    #[serde(rename = "Keyword")]
    keyword: String,
}

/// Insertion-ordered mapping of discipline names to their keyword lists.
///
/// A discipline appears once per distinct name, in first-row order, and its
/// keyword list accumulates one entry per row as encountered (lowercased and
/// trimmed, not deduplicated).
#[derive(Debug, Clone, Default)]
pub struct DisciplineTable {
    entries: Vec<(String, Vec<String>)>,
}

impl DisciplineTable {
    /// Loads the table from a CSV file with `Discipline` and `Keyword` columns.
    ///
    /// # Errors
    /// Returns [`ClassifyError::Table`] if the file cannot be read or a row
    /// does not carry both columns.
    pub fn load(path: &Path) -> Result<Self, ClassifyError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| ClassifyError::table(path, e))?;

        let mut entries: Vec<(String, Vec<String>)> = Vec::new();
        for row in reader.deserialize::<TableRow>() {
            let row = row.map_err(|e| ClassifyError::table(path, e))?;
            let discipline = row.discipline.trim().to_string();
            let keyword = row.keyword.trim().to_lowercase();
            match entries.iter_mut().find(|(name, _)| *name == discipline) {
                Some((_, keywords)) => keywords.push(keyword),
                None => entries.push((discipline, vec![keyword])),
            }
        }

        debug!(disciplines = entries.len(), "discipline table loaded");
        Ok(Self { entries })
    }

    /// Iterates disciplines and their keyword lists in table row order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, keywords)| (name.as_str(), keywords.as_slice()))
    }

    /// Number of distinct disciplines in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the table carries no disciplines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
