//! [Command-line interface](Cli) (CLI) of the main binary.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

// ----------------------------------------------------------------------------
// CLI Entry Point
// ----------------------------------------------------------------------------

/// The command-line interface (CLI).
/// ---
/// The CLI is intended for parsing user input from the command-line in the main function. This is achieved with the `parse` function, which parses the command line arguments from [`std::env::args`](https://doc.rust-lang.org/std/env/fn.args.html).
/// ```no_run
/// use clap::Parser;
/// let args = snpview::Cli::parse();
/// ```
/// Here is a manual example of setting the command-line input:
/// ```rust
/// # use clap::Parser;
/// let input = ["snpview", "--data-dir", "data", "--verbosity", "debug"];
/// let args = snpview::Cli::parse_from(input);
/// serde_json::to_string_pretty(&args)?;
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
/// With the following pretty JSON representation:
/// ```json
/// {
///   "data_dir": "data",
///   "verbosity": "Debug"
/// }
/// ```
#[derive(Debug, Deserialize, Parser, Serialize)]
#[clap(name = "snpview", author, version)]
#[clap(about = "View information on SNPs from M. bovis wild strains.")]
pub struct Cli {
    /// Directory containing main_df.csv, snp_df.csv, and mutpred_results.csv.
    ///
    /// Defaults to `data/` next to the executable, see [`default_data_dir`](crate::utils::default_data_dir).
    #[clap(short = 'd', long)]
    #[clap(help = "Directory of the SNP datasets [default: data/ next to the executable].")]
    pub data_dir: Option<PathBuf>,

    /// Set the output [Verbosity] level.
    #[clap(short = 'v', long)]
    #[clap(value_enum, default_value_t = Verbosity::default())]
    #[clap(hide_possible_values = false)]
    #[clap(global = true)]
    #[clap(help = "Set the output verbosity level.")]
    pub verbosity: Verbosity,
}

// -----------------------------------------------------------------------------
// Verbosity
// -----------------------------------------------------------------------------

/// The output verbosity level.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ValueEnum)]
pub enum Verbosity {
    #[default]
    Info,
    Warn,
    Debug,
    Error,
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        // Convert to lowercase for RUST_LOG env var compatibility
        let lowercase = format!("{:?}", self).to_lowercase();
        write!(f, "{lowercase}")
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Verbosity};
    use clap::Parser;
    use color_eyre::eyre::{Report, Result};
    use std::path::PathBuf;

    #[test]
    fn defaults() {
        let args = Cli::parse_from(["snpview"]);
        assert_eq!(args.data_dir, None);
        assert_eq!(args.verbosity, Verbosity::Info);
        assert_eq!(args.verbosity.to_string(), "info");
    }

    #[test]
    fn short_flags() -> Result<(), Report> {
        let args = Cli::try_parse_from(["snpview", "-d", "toy", "-v", "warn"])?;
        assert_eq!(args.data_dir, Some(PathBuf::from("toy")));
        assert_eq!(args.verbosity, Verbosity::Warn);
        Ok(())
    }

    #[test]
    fn invalid_verbosity() {
        assert!(Cli::try_parse_from(["snpview", "--verbosity", "loud"]).is_err());
    }

    #[test]
    fn json() -> Result<(), Report> {
        let args = Cli::parse_from(["snpview", "--data-dir", "data", "--verbosity", "debug"]);
        let observed = serde_json::to_value(&args)?;
        let expected = serde_json::json!({ "data_dir": "data", "verbosity": "Debug" });
        assert_eq!(observed, expected);
        Ok(())
    }
}
