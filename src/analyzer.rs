//! End-to-end analysis pipeline over a console session.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use crate::analysis;
use crate::analysis::KeywordExtractor;
use crate::classify::classify;
use crate::input::InputCollector;
use crate::report::{AnalysisReport, save_report};

/// Drives a full analysis session: collect, extract, classify, score,
/// render, and optionally save.
///
/// Composes an [`InputCollector`] and a [`KeywordExtractor`] as fields and
/// delegates to them; the collector owns the console handles for the whole
/// session.
#[derive(Debug)]
pub struct AbstractAnalyzer<R, W> {
    collector: InputCollector<R, W>,
    extractor: KeywordExtractor,
    table_path: PathBuf,
}

impl<R: BufRead, W: Write> AbstractAnalyzer<R, W> {
    /// Creates an analyzer over the given console handles and discipline
    /// table path.
    ///
    /// # Errors
    /// Returns error if the keyword extractor fails to initialize.
    pub fn new(reader: R, writer: W, table_path: PathBuf) -> Result<Self> {
        Ok(Self {
            collector: InputCollector::new(reader, writer),
            extractor: KeywordExtractor::new().context("failed to initialize keyword extractor")?,
            table_path,
        })
    }

    /// Runs one complete interactive session.
    ///
    /// # Errors
    /// Returns error on console I/O failure or when the discipline table
    /// cannot be loaded. A failed report save is reported to the console and
    /// is not an error here.
    pub fn run(&mut self) -> Result<()> {
        let submission = self.collector.collect_submission()?;

        let keywords = self.extractor.extract(&submission.abstract_text);
        debug!(keywords = keywords.len(), "keywords extracted");

        let discipline = classify(&self.table_path, &keywords)
            .context("discipline classification failed")?;
        let readability = analysis::score_readability(&submission.abstract_text);
        info!(
            discipline = %discipline,
            score = readability.score,
            "abstract analyzed"
        );

        let analysis_report = AnalysisReport {
            discipline,
            name: submission.name,
            research_topic: submission.research_topic,
            readability,
            keywords,
        };
        writeln!(self.collector.console_mut(), "{}", analysis_report.render())?;

        if self.collector.collect_save_decision()? {
            let config = self.collector.collect_save_config()?;
            match save_report(&config, &analysis_report) {
                Ok(_) => {
                    writeln!(
                        self.collector.console_mut(),
                        "The Abstract Analysis is saved as a {} file\nThank You!!!",
                        config.format.label()
                    )?;
                }
                Err(err) => {
                    // Caught on purpose: a failed save ends the run normally.
                    error!(%err, "report not saved");
                    writeln!(self.collector.console_mut(), "Error:\n{err}\nFILE NOT SAVED")?;
                }
            }
        } else {
            writeln!(
                self.collector.console_mut(),
                "Thanks for using the Abstract Analysis Tools"
            )?;
        }

        Ok(())
    }
}
