//! Report assembly and persistence.

mod format;
mod writer;

pub use format::{AnalysisReport, JsonReport};
pub use writer::{
    DEFAULT_FILE_NAME, OUTPUT_DIR, ReportError, SaveConfig, SaveFormat, save_report,
};
