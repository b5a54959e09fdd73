//! Loading, preparing, and sharing the SNP [`Datasets`].

mod error;
pub mod prepare;
pub mod toy;

#[cfg(test)]
mod tests;

#[doc(inline)]
pub use error::DataError;

use color_eyre::eyre::{Report, Result};
use color_eyre::Help;
use itertools::Itertools;
use log::{debug, info};
use snpview_table::Table;
use std::fmt::{Debug, Display, Formatter};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use strum::EnumIter;

// ----------------------------------------------------------------------------
// Dataset Name
// ----------------------------------------------------------------------------

/// The [`Name`] of a dataset, which is also the stem of its file in the data directory.
#[derive(Clone, Copy, Debug, EnumIter, Eq, PartialEq)]
pub enum Name {
    /// SNP calls per genome (`main_df`).
    MainDf,
    /// Unique SNPs across all genomes (`snp_df`).
    SnpDf,
    /// MutPred2 predictions for the characteristic SNPs (`mutpred_results`).
    MutpredResults,
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Name::MainDf => "main_df",
            Name::SnpDf => "snp_df",
            Name::MutpredResults => "mutpred_results",
        };
        write!(f, "{name}")
    }
}

impl Name {
    /// Returns the path of the dataset file inside `data_dir`.
    ///
    /// ```rust
    /// use snpview::dataset::Name;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(Name::SnpDf.path(&"data"), PathBuf::from("data/snp_df.csv"));
    /// ```
    pub fn path<P>(&self, data_dir: &P) -> PathBuf
    where
        P: AsRef<Path>,
    {
        data_dir.as_ref().join(format!("{self}.csv"))
    }
}

/// Read the raw [`Table`] of a named dataset from `data_dir`.
///
/// ## Errors
///
/// - [`DataError::NotFound`] if the dataset file does not exist.
/// - [`DataError::Malformed`] if the file is not a delimited table with a header row.
pub fn load<P>(name: Name, data_dir: &P) -> Result<Table<String>, Report>
where
    P: AsRef<Path> + Debug,
{
    let path = name.path(data_dir);
    info!("Loading dataset {name}: {path:?}");

    if !path.is_file() {
        return Err(DataError::NotFound { path })
            .suggestion("Is --data-dir set to the directory with main_df.csv, snp_df.csv and mutpred_results.csv?");
    }

    let table = Table::read(&path, None).map_err(|e| DataError::Malformed {
        path: path.clone(),
        reason: e.chain().map(|cause| cause.to_string()).join(": "),
    })?;
    debug!("Loaded dataset {name}: {} columns, {} rows", table.headers.len(), table.len());

    Ok(table)
}

// ----------------------------------------------------------------------------
// Datasets
// ----------------------------------------------------------------------------

static DATASETS: OnceLock<Datasets> = OnceLock::new();

/// The three prepared tables every view reads from.
///
/// Nothing mutates a [`Datasets`] after it is prepared. Use [`Datasets::init`]
/// to prepare the tables once per process and share them from then on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Datasets {
    /// Unmasked SNP calls per genome, sorted by position. See [`prepare::samples`].
    pub samples: Table<String>,
    /// Unmasked unique SNPs, sorted by position. See [`prepare::snps`].
    pub snps: Table<String>,
    /// Characteristic SNP predictions, sorted by gene. See [`prepare::predictions`].
    pub predictions: Table<String>,
}

impl Datasets {
    /// Load and prepare all three datasets from `data_dir`.
    ///
    /// Every call reads the files again. The first error is returned unchanged.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use snpview::dataset::{toy, Datasets};
    ///
    /// let dir = tempfile::tempdir()?;
    /// toy::write(&dir)?;
    /// let datasets = Datasets::load(&dir)?;
    /// assert_eq!(datasets.genomes()?, ["G1", "G2", "G3"]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn load<P>(data_dir: &P) -> Result<Datasets, Report>
    where
        P: AsRef<Path> + Debug,
    {
        let datasets = Datasets {
            samples: prepare::samples(load(Name::MainDf, data_dir)?)?,
            snps: prepare::snps(load(Name::SnpDf, data_dir)?)?,
            predictions: prepare::predictions(load(Name::MutpredResults, data_dir)?)?,
        };
        info!(
            "Prepared datasets: {} genome SNPs, {} unique SNPs, {} predictions",
            datasets.samples.len(),
            datasets.snps.len(),
            datasets.predictions.len()
        );
        Ok(datasets)
    }

    /// Returns the process-wide [`Datasets`], preparing them from `data_dir` on the first call.
    ///
    /// Later calls return the same tables and ignore `data_dir`, changed files
    /// are only picked up by restarting the process. A failed first call leaves
    /// nothing cached.
    pub fn init<P>(data_dir: &P) -> Result<&'static Datasets, Report>
    where
        P: AsRef<Path> + Debug,
    {
        if let Some(datasets) = DATASETS.get() {
            debug!("Using prepared datasets.");
            return Ok(datasets);
        }
        let datasets = Datasets::load(data_dir)?;
        Ok(DATASETS.get_or_init(|| datasets))
    }

    /// Returns the distinct genome identifiers, sorted ascending.
    pub fn genomes(&self) -> Result<Vec<String>, Report> {
        self.samples.unique(prepare::GENOME)
    }

    /// Returns the distinct gene names of the unique SNPs, sorted ascending.
    ///
    /// SNPs outside of genes have an empty gene name and are not listed.
    pub fn genes(&self) -> Result<Vec<String>, Report> {
        let mut genes = self.snps.unique(prepare::GENE)?;
        genes.retain(|gene| !gene.is_empty());
        Ok(genes)
    }
}

/// Resolve the `value` chosen from a selection list of `what`.
///
/// No `value` picks the first entry.
///
/// ## Errors
///
/// - [`DataError::EmptySelection`] if `values` is empty.
/// - [`DataError::UnknownSelection`] if `value` is not one of the `values`.
pub fn choose<'v>(what: &str, values: &'v [String], value: Option<&str>) -> Result<&'v str, Report> {
    let first = values.first().ok_or_else(|| DataError::EmptySelection { what: what.to_string() })?;
    match value {
        None => Ok(first.as_str()),
        Some(value) => {
            let found = values.iter().find(|v| *v == value).ok_or_else(|| {
                DataError::UnknownSelection { what: what.to_string(), value: value.to_string() }
            })?;
            Ok(found.as_str())
        }
    }
}
