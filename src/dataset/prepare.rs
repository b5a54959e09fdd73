//! Turn the raw dataset tables into the working tables the views read.

use crate::dataset::DataError;
use color_eyre::eyre::{Report, Result};
use color_eyre::Help;
use snpview_table::Table;
use std::path::PathBuf;

// ----------------------------------------------------------------------------
// Columns

pub const GENOME: &str = "genome";
pub const POS: &str = "POS";
pub const REF: &str = "REF";
pub const ALT: &str = "ALT";
pub const QUAL: &str = "QUAL";
pub const EFFECT: &str = "snp__effect";
pub const GENE: &str = "snp__gene_name";
pub const BIOTYPE: &str = "snp__biotype";
pub const HGVSP: &str = "snp__hgvsp";
pub const CLASSIFICATION: &str = "classification";
pub const HOST: &str = "Host";
pub const MASKED: &str = "masked_snp";
pub const GENOME_COUNT: &str = "genome_count";
pub const CLASSIFICATION_COUNT: &str = "classification_count";
pub const MODE_CLASS: &str = "mode_class";
pub const CHARACTERISTIC: &str = "characteristic_snp";
/// Gene column of the predictions.
pub const PREDICTION_GENE: &str = "gene";
pub const COMMENT: &str = "comment";

/// Columns of the prepared samples table, in order.
pub const SAMPLE_COLUMNS: &[&str] =
    &[GENOME, POS, REF, ALT, QUAL, EFFECT, GENE, BIOTYPE, HGVSP, CLASSIFICATION, HOST];

/// Columns of the prepared unique SNP table, in order.
pub const SNP_COLUMNS: &[&str] = &[
    POS,
    REF,
    ALT,
    GENE,
    GENOME_COUNT,
    CLASSIFICATION_COUNT,
    MODE_CLASS,
    CHARACTERISTIC,
    EFFECT,
    HGVSP,
];

pub const MISSENSE: &str = "missense_variant";
pub const SYNONYMOUS: &str = "synonymous_variant";

// ----------------------------------------------------------------------------
// Preparers

/// Prepare the per-genome SNP calls (`main_df`).
///
/// Drops masked SNPs, sorts by position, renumbers the rows from zero, and
/// keeps the [`SAMPLE_COLUMNS`].
pub fn samples(raw: Table<String>) -> Result<Table<String>, Report> {
    require_columns(&raw, &[MASKED])?;
    require_columns(&raw, SAMPLE_COLUMNS)?;
    unmasked_by_position(&raw)?.select(SAMPLE_COLUMNS)
}

/// Prepare the unique SNPs (`snp_df`).
///
/// Drops masked SNPs, sorts by position, renumbers the rows from zero, and
/// keeps the [`SNP_COLUMNS`].
pub fn snps(raw: Table<String>) -> Result<Table<String>, Report> {
    require_columns(&raw, &[MASKED])?;
    require_columns(&raw, SNP_COLUMNS)?;
    unmasked_by_position(&raw)?.select(SNP_COLUMNS)
}

/// Prepare the characteristic SNP predictions (`mutpred_results`).
///
/// Sorts by gene, renumbers the rows from zero, and drops the free-text
/// comment. All other columns are kept as they are.
pub fn predictions(raw: Table<String>) -> Result<Table<String>, Report> {
    require_columns(&raw, &[PREDICTION_GENE, COMMENT])?;
    let mut table = raw;
    table.sort_by_key(PREDICTION_GENE, |gene| Ok(gene.clone()))?;
    table.reset_index();
    table.drop(&[COMMENT])
}

fn unmasked_by_position(raw: &Table<String>) -> Result<Table<String>, Report> {
    let mut table = raw.try_filter(MASKED, |value| Ok(!parse_flag(value, &raw.path)?))?;
    table.sort_by_key(POS, |value| parse_position(value, &raw.path))?;
    table.reset_index();
    Ok(table)
}

fn require_columns(table: &Table<String>, columns: &[&str]) -> Result<(), Report> {
    match columns.iter().find(|column| table.get_header_index(column).is_err()) {
        Some(column) => Err(DataError::MissingColumn {
            column: column.to_string(),
            path: table.path.clone().unwrap_or_default(),
        })
        .suggestion(format!("Expected columns: {}", columns.join(", "))),
        None => Ok(()),
    }
}

// ----------------------------------------------------------------------------
// Values

/// Parse a masking flag. An empty value counts as not masked.
///
/// ```rust
/// use snpview::dataset::prepare::parse_flag;
///
/// assert!(parse_flag("True", &None)?);
/// assert!(!parse_flag("False", &None)?);
/// assert!(!parse_flag("", &None)?);
/// assert!(parse_flag("maybe", &None).is_err());
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn parse_flag(value: &str, path: &Option<PathBuf>) -> Result<bool, Report> {
    match value.trim() {
        "True" | "true" | "TRUE" | "1" => Ok(true),
        "False" | "false" | "FALSE" | "0" | "" => Ok(false),
        other => Err(DataError::Malformed {
            path: path.clone().unwrap_or_default(),
            reason: format!("Invalid {MASKED} value: {other:?}"),
        }
        .into()),
    }
}

/// Parse a genomic position.
pub fn parse_position(value: &str, path: &Option<PathBuf>) -> Result<u64, Report> {
    let position = value.trim().parse::<u64>().map_err(|e| DataError::Malformed {
        path: path.clone().unwrap_or_default(),
        reason: format!("Invalid {POS} value {value:?}: {e}"),
    })?;
    Ok(position)
}
