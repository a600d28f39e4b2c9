//! Writing the analysis report to disk as text or JSON.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use crate::report::format::{AnalysisReport, JsonReport};

/// Subdirectory all reports are written into. Must already exist; the writer
/// does not create it.
pub const OUTPUT_DIR: &str = "Abstract_Analyzer_files";

/// Base file name used when the user leaves the name prompt blank.
pub const DEFAULT_FILE_NAME: &str = "Abstract_Analysis";

/// Output format for a saved report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    /// The rendered report string, verbatim.
    Text,
    /// The structured [`JsonReport`] document, indented.
    Json,
}

impl SaveFormat {
    /// Parses a lowercased user answer into a format.
    #[must_use]
    pub fn parse(answer: &str) -> Option<Self> {
        match answer {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// File extension for this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }

    /// Human-readable label used in console messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "Json",
        }
    }
}

/// Where and how a report should be saved.
///
/// Threaded through the writer as a value rather than held in shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveConfig {
    /// User-chosen base name, lowercased, without extension.
    pub file_name: String,
    /// Chosen output format.
    pub format: SaveFormat,
}

impl SaveConfig {
    /// Full output path under [`OUTPUT_DIR`].
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        Path::new(OUTPUT_DIR).join(format!("{}.{}", self.file_name, self.format.extension()))
    }
}

/// Errors that can occur while saving a report.
///
/// The caller catches these, reports them to the console, and lets the run
/// end normally; a failed save never aborts the program.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output file could not be created or written, typically because
    /// the output directory does not exist.
    #[error(
        "could not write '{}': {source}\n  Suggestion: The 'Abstract_Analyzer_files' directory must exist in the working directory",
        path.display()
    )]
    Write {
        /// Target path of the failed write.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The JSON document could not be serialized.
    #[error("could not serialize report to JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Saves the report under [`OUTPUT_DIR`] in the configured format.
///
/// Text output is the rendered report string verbatim; JSON output is the
/// [`JsonReport`] document with four-space indentation.
///
/// # Errors
/// Returns [`ReportError`] if the file cannot be created (the output
/// directory is never created here) or written.
#[instrument(skip(report), fields(path = %config.output_path().display()))]
pub fn save_report(config: &SaveConfig, report: &AnalysisReport) -> Result<PathBuf, ReportError> {
    let path = config.output_path();
    let mut file = File::create(&path).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;

    let contents = match config.format {
        SaveFormat::Text => report.render().into_bytes(),
        SaveFormat::Json => {
            let document = JsonReport::from(report);
            let mut buffer = Vec::new();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
            document.serialize(&mut serializer)?;
            buffer
        }
    };

    file.write_all(&contents).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "report saved");
    Ok(path)
}
