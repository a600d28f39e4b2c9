//! Abstract Analyzer Library
//!
//! This library provides the core functionality for the abstract-analyzer
//! tool, which collects a research abstract interactively, extracts its most
//! important keywords, classifies it into an academic discipline, scores its
//! readability, and renders the result as a report that can be saved to disk.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`input`] - Interactive prompt loops and submission validation
//! - [`analysis`] - Keyword extraction and readability scoring
//! - [`classify`] - Discipline classification against a CSV keyword table
//! - [`report`] - Report formatting and text/JSON persistence
//!
//! [`AbstractAnalyzer`] composes the pieces into the full pipeline.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub mod analyzer;
pub mod classify;
pub mod input;
pub mod report;

// Re-export commonly used types
pub use analysis::{KeywordExtractor, KeywordScore, ReadabilityReport, score_readability};
pub use analyzer::AbstractAnalyzer;
pub use classify::{ClassifyError, DisciplineTable, NO_MATCH_SENTINEL, classify};
pub use input::{InputCollector, Submission};
pub use report::{AnalysisReport, JsonReport, ReportError, SaveConfig, SaveFormat, save_report};
