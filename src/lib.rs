//! `snpview` is a terminal dashboard for SNPs from _Mycobacterium bovis_ wild strains.
//!
//! It reads three static tables from a data directory:
//!
//! 1. `main_df.csv`: SNP calls per genome, with the host and sublineage of each genome.
//! 1. `snp_df.csv`: the unique SNPs across all genomes, with aggregate counts.
//! 1. `mutpred_results.csv`: MutPred2 predictions for the _characteristic_ SNPs.
//!
//! Masked SNPs are dropped and the tables are sorted once at startup, then the
//! user picks a view from the dashboard options:
//!
//! - **Specific genome**: every SNP of one genome, and its missense SNPs counted by gene.
//! - **Specific gene**: every SNP within one gene, per genome and unique.
//! - **SNP list**: every unique SNP.
//! - **Characteristic SNPs**: the MutPred2 predictions.
//! - **Help**: what the options do.
//!
//! ## Examples
//!
//! ```rust
//! use snpview::dataset::{toy, Datasets};
//! use snpview::view::{render, MenuOption};
//!
//! let dir = tempfile::tempdir()?;
//! toy::write(&dir)?;
//! let datasets = Datasets::load(&dir)?;
//!
//! let page = render(&datasets, MenuOption::SpecificGene, Some("gyrA"))?;
//! assert_eq!(page.lines()[1], "Total SNP count: 3");
//! # Ok::<(), color_eyre::eyre::Report>(())
//! ```

pub mod cli;
pub mod dataset;
pub mod session;
pub mod utils;
pub mod view;

#[doc(inline)]
pub use crate::cli::{Cli, Verbosity};
#[doc(inline)]
pub use crate::dataset::Datasets;
#[doc(inline)]
pub use crate::session::Session;
#[doc(inline)]
pub use crate::view::MenuOption;
