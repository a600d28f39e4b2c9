//! Discipline classification against a CSV-backed keyword table.

mod classifier;
mod error;
mod table;

pub use classifier::{NO_MATCH_SENTINEL, classify};
pub use error::ClassifyError;
pub use table::DisciplineTable;
