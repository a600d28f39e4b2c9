//! Prompt loops for collecting a submission from the console.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::input::validation::{Submission, is_valid_abstract, is_valid_name, is_valid_topic};
use crate::report::{DEFAULT_FILE_NAME, SaveConfig, SaveFormat};

/// Collects and validates user input over a reader/writer pair.
///
/// Generic over [`BufRead`]/[`Write`] so the loops can be driven by in-memory
/// buffers in tests and by locked stdin/stdout in the binary. Every invalid
/// input prints a message and re-prompts; validation failures are loop
/// conditions, never errors.
#[derive(Debug)]
pub struct InputCollector<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    /// Creates a collector over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Gives the pipeline access to the console writer for report output.
    pub fn console_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Prints a prompt and reads one line, without the trailing newline.
    ///
    /// # Errors
    /// Returns an error if the console cannot be read or written, or if the
    /// input stream ends mid-session.
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended while a prompt was waiting for a response",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompts for the user's full name until it passes validation.
    ///
    /// Returns the name uppercased.
    ///
    /// # Errors
    /// Returns an error only on console I/O failure.
    pub fn collect_name(&mut self) -> io::Result<String> {
        loop {
            let name = self.prompt("Kindly input your full name: ")?.to_uppercase();
            if is_valid_name(&name) {
                return Ok(name);
            }
            writeln!(self.writer, "INVALID NAME\nCHECK THE NAME AND TRY AGAIN!!!\n")?;
        }
    }

    /// Prompts for the research topic until it is longer than 30 characters.
    ///
    /// Returns the topic uppercased.
    ///
    /// # Errors
    /// Returns an error only on console I/O failure.
    pub fn collect_research_topic(&mut self) -> io::Result<String> {
        loop {
            let topic = self
                .prompt("What is the name of your research topics: ")?
                .to_uppercase();
            if is_valid_topic(&topic) {
                return Ok(topic);
            }
            writeln!(
                self.writer,
                "INVALID RESEARCH TOPIC\nRESEARCH TOPIC LENGTH MUST BE GREATER THAN 30\nCHECK THE RESEARCH TOPIC AND TRY AGAIN!!!\n"
            )?;
        }
    }

    /// Prompts for the abstract until it reaches 100 space-separated tokens.
    ///
    /// The text is kept verbatim; no case change.
    ///
    /// # Errors
    /// Returns an error only on console I/O failure.
    pub fn collect_abstract(&mut self) -> io::Result<String> {
        loop {
            let text = self.prompt("Kindly paste the research abstract here: ")?;
            if is_valid_abstract(&text) {
                return Ok(text);
            }
            writeln!(
                self.writer,
                "INVALID ABSTRACT FROM RESEARCH\nABSTRACT LENGTH MUST BE GREATER THAN 99\nCHECK THE ABSTRACT AND TRY AGAIN!!!\n"
            )?;
        }
    }

    /// Collects name, topic, and abstract with one confirmation pass.
    ///
    /// After name and topic are shown back, a yes/no loop decides the path:
    /// "yes" locks them and moves straight to the abstract, "no" triggers
    /// exactly one re-collection of all three fields with no second
    /// confirmation. Any other answer re-prompts the question only.
    ///
    /// # Errors
    /// Returns an error only on console I/O failure.
    pub fn collect_submission(&mut self) -> io::Result<Submission> {
        writeln!(
            self.writer,
            "\nNOTE: ALL INFORMATION MUST BE IN WORDS AND INFORMATION CAN ONLY BE EDITED ONCE\nKINDLY INPUT THE FOLLOWING INFORMATION: [Full Name, Research Topic, Research Abstract]\n"
        )?;
        let mut name = self.collect_name()?;
        let mut research_topic = self.collect_research_topic()?;

        writeln!(
            self.writer,
            "\nCHECK THE INFORMATION WELL\nName: {name}\nResearch Topic: {research_topic}\n"
        )?;

        let abstract_text = loop {
            let answer = self
                .prompt("The information provided above are they correct before going ahead (yes/no)?: ")?
                .to_lowercase();
            match answer.as_str() {
                "yes" => {
                    writeln!(self.writer, "\nThanks!!! Information can't be re-edited again\n")?;
                    break self.collect_abstract()?;
                }
                "no" => {
                    // Single-shot edit pass: re-collect everything, no second confirmation.
                    writeln!(self.writer, "\nkindly input your right information well\n")?;
                    name = self.collect_name()?;
                    research_topic = self.collect_research_topic()?;
                    break self.collect_abstract()?;
                }
                _ => {
                    writeln!(self.writer, "\nWrong Input[Kindly input 'yes/no']\nTry again!!!\n")?;
                }
            }
        };

        debug!(name = %name, "submission confirmed");
        Ok(Submission {
            name,
            research_topic,
            abstract_text,
        })
    }

    /// Asks whether the analysis should be saved. Loops until yes or no.
    ///
    /// # Errors
    /// Returns an error only on console I/O failure.
    pub fn collect_save_decision(&mut self) -> io::Result<bool> {
        loop {
            let answer = self
                .prompt("\nDo you want to save your analysis YES/NO: ")?
                .to_lowercase();
            match answer.as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => writeln!(self.writer, "\nInvalid input\nKindly input YES/NO")?,
            }
        }
    }

    /// Prompts for the output file name and format.
    ///
    /// A blank file name falls back to the default base name. The format
    /// question loops until the answer is TEXT or JSON.
    ///
    /// # Errors
    /// Returns an error only on console I/O failure.
    pub fn collect_save_config(&mut self) -> io::Result<SaveConfig> {
        let mut file_name = self.prompt("\nWhat the name of the file: ")?.to_lowercase();
        if file_name.is_empty() {
            file_name = DEFAULT_FILE_NAME.to_string();
        }

        let format = loop {
            let answer = self
                .prompt("\nHow do you want the file to be saved TEXT/JSON file: ")?
                .to_lowercase();
            match SaveFormat::parse(&answer) {
                Some(format) => break format,
                None => writeln!(self.writer, "\nInvalid input\nKindly input TEXT/JSON")?,
            }
        };

        Ok(SaveConfig { file_name, format })
    }
}
