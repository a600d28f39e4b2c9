//! Error types for discipline classification.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the discipline table.
///
/// These propagate uncaught to the top of the run: a missing or malformed
/// table is not a recoverable condition for classification.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The table file could not be read or parsed.
    #[error(
        "failed to read discipline table '{}': {source}\n  Suggestion: The file must exist and carry 'Discipline' and 'Keyword' columns",
        path.display()
    )]
    Table {
        /// Path the table was loaded from.
        path: PathBuf,
        /// Underlying CSV/IO failure.
        #[source]
        source: csv::Error,
    },
}

impl ClassifyError {
    pub(crate) fn table(path: &std::path::Path, source: csv::Error) -> Self {
        Self::Table {
            path: path.to_path_buf(),
            source,
        }
    }
}
