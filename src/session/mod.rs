//! The interactive terminal dashboard.
//!
//! A [`Session`] prints the dashboard options, reads the user's choice, and
//! prints the rendered view, until the user quits or the input ends.

#[cfg(test)]
mod tests;

use crate::dataset::Datasets;
use crate::view::{self, MenuOption};
use color_eyre::eyre::{Report, Result, WrapErr};
use log::{debug, warn};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;

pub const TITLE: &str = "M. bovis SNP Viewer";
pub const SUBHEADER: &str = "View information on SNPs from M. bovis wild strains";

/// Answers that end the session.
pub const QUIT: &[&str] = &["q", "quit", "exit"];

/// An interactive dashboard, reading answers from `input` and writing views to `output`.
///
/// ## Examples
///
/// ```rust
/// use snpview::dataset::{toy, Datasets};
/// use snpview::Session;
///
/// let dir = tempfile::tempdir()?;
/// toy::write(&dir)?;
/// let datasets = Datasets::load(&dir)?;
///
/// let input = "Specific genome\n2\nq\n".as_bytes();
/// let mut output = Vec::new();
/// Session::new(&datasets, input, &mut output).run()?;
///
/// let output = String::from_utf8(output)?;
/// assert!(output.contains("Genome: G2"));
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub struct Session<'d, R, W> {
    datasets: &'d Datasets,
    input: R,
    output: W,
}

impl<'d, R, W> Session<'d, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(datasets: &'d Datasets, input: R, output: W) -> Self {
        Session { datasets, input, output }
    }

    /// Run the dashboard until the user quits or the input ends.
    ///
    /// Errors from rendering a view are shown to the user and the session
    /// continues, only failures to read or write end it early.
    pub fn run(&mut self) -> Result<(), Report> {
        writeln!(self.output, "{TITLE}")?;
        writeln!(self.output, "{SUBHEADER}")?;

        loop {
            self.menu()?;
            let Some(answer) = self.read_answer()? else { break };
            let option = parse_option(&answer);
            debug!("Selected option: {option}");

            let values = match option {
                MenuOption::SpecificGenome => Some(("genome", self.datasets.genomes())),
                MenuOption::SpecificGene => Some(("gene", self.datasets.genes())),
                _ => None,
            };

            // an empty or unavailable list is reported by the view itself
            let entity = match values {
                Some((what, Ok(values))) if !values.is_empty() => match self.pick(what, &values)? {
                    Some(value) => Some(value),
                    None => break,
                },
                _ => None,
            };

            match view::render(self.datasets, option, entity.as_deref()) {
                Ok(page) => writeln!(self.output, "{page}")?,
                Err(e) => {
                    warn!("Failed to render {option}: {e}");
                    writeln!(self.output, "Error: {e}")?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn menu(&mut self) -> Result<(), Report> {
        writeln!(self.output)?;
        writeln!(self.output, "Dashboard options")?;
        for (i, option) in MenuOption::iter().enumerate() {
            writeln!(self.output, "  {i}) {option}")?;
        }
        Ok(())
    }

    /// Prompt for one of `values`, by number (from 1) or by value.
    ///
    /// An empty answer picks the first value, an invalid answer prompts again.
    /// Returns [`None`] when the user quits or the input ends.
    fn pick(&mut self, what: &str, values: &[String]) -> Result<Option<String>, Report> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Choose a {what}")?;
            for (i, value) in values.iter().enumerate() {
                writeln!(self.output, "  {}) {value}", i + 1)?;
            }

            let Some(answer) = self.read_answer()? else { return Ok(None) };
            if answer.is_empty() {
                return Ok(values.first().cloned());
            }

            let picked = match answer.parse::<usize>() {
                Ok(n) if (1..=values.len()).contains(&n) => values.get(n - 1),
                _ => values.iter().find(|value| **value == answer),
            };
            match picked {
                Some(value) => return Ok(Some(value.clone())),
                None => writeln!(self.output, "Invalid {what}: {answer}")?,
            }
        }
    }

    /// Read one trimmed answer, [`None`] at the end of input or on a [`QUIT`] answer.
    fn read_answer(&mut self) -> Result<Option<String>, Report> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes = self.input.read_line(&mut line).wrap_err("Failed to read input.")?;
        let answer = line.trim();

        if bytes == 0 || QUIT.contains(&answer) {
            debug!("Ending session.");
            return Ok(None);
        }
        Ok(Some(answer.to_string()))
    }
}

/// Parse a menu answer, either the option's number or its label.
///
/// ```rust
/// use snpview::session::parse_option;
/// use snpview::MenuOption;
///
/// assert_eq!(parse_option("3"), MenuOption::SnpList);
/// assert_eq!(parse_option("Help"), MenuOption::Help);
/// assert_eq!(parse_option("42"), MenuOption::Unselected);
/// ```
pub fn parse_option(answer: &str) -> MenuOption {
    match answer.parse::<usize>() {
        Ok(i) => MenuOption::iter().nth(i).unwrap_or_default(),
        Err(_) => MenuOption::from_label(answer),
    }
}
