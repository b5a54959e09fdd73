//! The dashboard views, and the [`MenuOption`] that selects between them.

mod page;


#[doc(inline)]
pub use page::{to_tabled, Block, Page};

use crate::dataset::prepare::{CLASSIFICATION, EFFECT, GENE, GENOME, HOST, MISSENSE, SYNONYMOUS};
use crate::dataset::{self, Datasets};
use color_eyre::eyre::{Report, Result};
use indoc::indoc;
use log::{debug, warn};
use std::fmt::{Display, Formatter};
use strum::{EnumIter, IntoEnumIterator};

pub const HELP: &str = indoc! {"
    This tool allows a user to display data on SNPs from M. bovis wild strains.
    The options are to:
      1) Select a specific genome and see all SNPs associated with it.
      2) Select a specific gene and see all SNPs found within it.
      3) View the full list of SNPs observed across the genomes analysed.
      4) View the MutPred2 predictions for 'characteristic SNPs'."};

pub const WELCOME: &str = "An option must be selected to display data.";

// ----------------------------------------------------------------------------
// Menu Option
// ----------------------------------------------------------------------------

/// The dashboard menu. Each option is rendered by one view.
#[derive(Clone, Copy, Debug, Default, EnumIter, Eq, PartialEq)]
pub enum MenuOption {
    /// Nothing selected yet, or an unrecognized label.
    #[default]
    Unselected,
    SpecificGenome,
    SpecificGene,
    SnpList,
    CharacteristicSnps,
    Help,
}

impl MenuOption {
    /// Returns the label shown in the menu.
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Unselected => "Select...",
            MenuOption::SpecificGenome => "Specific genome",
            MenuOption::SpecificGene => "Specific gene",
            MenuOption::SnpList => "SNP list",
            MenuOption::CharacteristicSnps => "Characteristic SNPs",
            MenuOption::Help => "Help",
        }
    }

    /// Returns the [`MenuOption`] with this label, [`MenuOption::Unselected`] for any other label.
    ///
    /// ```rust
    /// use snpview::view::MenuOption;
    ///
    /// assert_eq!(MenuOption::from_label("SNP list"), MenuOption::SnpList);
    /// assert_eq!(MenuOption::from_label("Plot"), MenuOption::Unselected);
    /// ```
    pub fn from_label(label: &str) -> MenuOption {
        MenuOption::iter().find(|option| option.label() == label).unwrap_or_default()
    }
}

impl Display for MenuOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ----------------------------------------------------------------------------
// Views
// ----------------------------------------------------------------------------

/// Render the view of a [`MenuOption`].
///
/// `entity` is the genome or gene picked in the secondary selector, and is
/// ignored by the other views.
///
/// ## Examples
///
/// ```rust
/// use snpview::dataset::Datasets;
/// use snpview::view::{render, MenuOption, WELCOME};
///
/// let page = render(&Datasets::default(), MenuOption::Unselected, None)?;
/// assert_eq!(page.lines(), [WELCOME]);
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn render(datasets: &Datasets, option: MenuOption, entity: Option<&str>) -> Result<Page, Report> {
    debug!("Rendering view: {option}, {entity:?}");
    match option {
        MenuOption::SpecificGenome => genome(datasets, entity),
        MenuOption::SpecificGene => gene(datasets, entity),
        MenuOption::SnpList => Ok(snp_list(datasets)),
        MenuOption::CharacteristicSnps => Ok(characteristic_snps(datasets)),
        MenuOption::Help => Ok(help()),
        MenuOption::Unselected => Ok(welcome()),
    }
}

/// All SNPs of one genome, and its missense SNPs counted by gene.
///
/// The host and sublineage are taken from the genome's first SNP.
pub fn genome(datasets: &Datasets, genome: Option<&str>) -> Result<Page, Report> {
    let genomes = datasets.genomes()?;
    let genome = dataset::choose("genome", &genomes, genome)?;
    let snps = datasets.samples.filter(GENOME, |g| g == genome)?;

    let host = first_of(&snps, HOST, genome)?;
    let classification = first_of(&snps, CLASSIFICATION, genome)?;

    let missense = snps
        .filter(EFFECT, |effect| effect == MISSENSE)?
        .value_counts(GENE, "Missense SNP count")?;

    let mut page = Page::new();
    page.text(format!("Genome: {genome}"))
        .text(format!("Host: {host}"))
        .text(format!("Sublineage: {classification}"))
        .text(format!("SNP count: {}", snps.len()))
        .subheader("SNP List")
        .table(snps.drop(&[HOST, CLASSIFICATION, GENOME])?)
        .subheader("Missense genes")
        .table(missense);

    Ok(page)
}

/// The first value under `header`, with a warning if the genome's other rows disagree.
fn first_of<'t>(
    snps: &'t snpview_table::Table<String>,
    header: &str,
    genome: &str,
) -> Result<&'t str, Report> {
    let values = snps.get_column(header)?;
    let first = snps.get(header, 0)?.as_str();
    if values.iter().any(|value| *value != first) {
        warn!("Genome {genome} has more than one {header}, reporting the first: {first}");
    }
    Ok(first)
}

/// All SNPs within one gene, from both the genome SNPs and the unique SNPs.
pub fn gene(datasets: &Datasets, gene: Option<&str>) -> Result<Page, Report> {
    let genes = datasets.genes()?;
    let gene = dataset::choose("gene", &genes, gene)?;

    let total = datasets.samples.filter(GENE, |g| g == gene)?;
    let unique = datasets.snps.filter(GENE, |g| g == gene)?;
    let non_synonymous = unique.filter(EFFECT, |effect| effect != SYNONYMOUS)?;
    let genomes = total.unique(GENOME)?;

    let mut page = Page::new();
    page.text(format!("Gene: {gene}"))
        .text(format!("Total SNP count: {}", total.len()))
        .text(format!("Unique SNP count: {}", unique.len()))
        .text(format!("Unique non-synonymous SNP count: {}", non_synonymous.len()))
        .text(format!("Genome count: {}", genomes.len()))
        .subheader("Genome SNPs")
        .table(total)
        .subheader("Unique SNPs")
        .table(unique);

    Ok(page)
}

/// Every unique SNP.
pub fn snp_list(datasets: &Datasets) -> Page {
    let mut page = Page::new();
    page.subheader("SNP List").table(datasets.snps.clone());
    page
}

/// The MutPred2 predictions for the characteristic SNPs.
pub fn characteristic_snps(datasets: &Datasets) -> Page {
    let mut page = Page::new();
    page.subheader("Characteristic SNPs").table(datasets.predictions.clone());
    page
}

pub fn help() -> Page {
    let mut page = Page::new();
    page.subheader("Help");
    HELP.lines().for_each(|line| {
        page.text(line);
    });
    page
}

pub fn welcome() -> Page {
    let mut page = Page::new();
    page.text(WELCOME);
    page
}
