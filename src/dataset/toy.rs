//! A small toy dataset, for trying out the dashboard and for testing.
//!
//! Three genomes from two hosts, with a masked SNP, an intergenic SNP, and
//! rows deliberately out of position order.

use crate::dataset::Name;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use log::info;
use std::fmt::Debug;
use std::path::Path;
use strum::IntoEnumIterator;

pub const MAIN_DF: &str = "\
genome,POS,REF,ALT,QUAL,snp__effect,snp__gene_name,snp__biotype,snp__hgvsp,classification,Host,masked_snp
G2,2500,C,T,225.0,synonymous_variant,katG,protein_coding,p.Leu10Leu,La1.2,Meles meles,False
G1,100,A,G,228.0,missense_variant,gyrA,protein_coding,p.Thr5Ala,La1.7,Bos taurus,False
G2,100,A,G,228.0,missense_variant,gyrA,protein_coding,p.Thr5Ala,La1.2,Meles meles,False
G3,1500,T,C,99.0,missense_variant,katG,protein_coding,p.Val4Ala,La1.8,Bos taurus,True
G2,900,G,A,140.0,missense_variant,gyrA,protein_coding,p.Gly300Asp,La1.2,Meles meles,False
G3,3100,G,T,180.0,upstream_gene_variant,,intergenic_region,,La1.8,Bos taurus,False
G2,3400,C,A,210.0,missense_variant,rpoB,protein_coding,p.Ala7Glu,La1.2,Meles meles,False
";

pub const SNP_DF: &str = "\
POS,REF,ALT,snp__gene_name,genome_count,classification_count,mode_class,characteristic_snp,snp__effect,snp__hgvsp,masked_snp
2500,C,T,katG,1,1,La1.2,False,synonymous_variant,p.Leu10Leu,False
100,A,G,gyrA,2,2,La1.2,False,missense_variant,p.Thr5Ala,False
900,G,A,gyrA,1,1,La1.2,True,missense_variant,p.Gly300Asp,False
1500,T,C,katG,1,1,La1.8,False,missense_variant,p.Val4Ala,True
3100,G,T,,1,1,La1.8,False,upstream_gene_variant,,False
3400,C,A,rpoB,1,1,La1.2,True,missense_variant,p.Ala7Glu,False
";

pub const MUTPRED_RESULTS: &str = "\
gene,substitution,mutpred2_score,molecular_mechanisms,comment
rpoB,A7E,0.712,Altered transmembrane protein,\"Near the RIF pocket, review\"
gyrA,G300D,0.845,Loss of helix,
gyrA,T5A,0.301,,Likely benign
";

/// Returns the file contents of a toy dataset.
pub fn contents(name: Name) -> &'static str {
    match name {
        Name::MainDf => MAIN_DF,
        Name::SnpDf => SNP_DF,
        Name::MutpredResults => MUTPRED_RESULTS,
    }
}

/// Write the toy datasets into `output_dir`, creating it if needed.
///
/// ```rust
/// use snpview::dataset::{toy, Name};
///
/// let dir = tempfile::tempdir()?;
/// toy::write(&dir)?;
/// assert!(Name::MainDf.path(&dir).exists());
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn write<P>(output_dir: &P) -> Result<(), Report>
where
    P: AsRef<Path> + Debug,
{
    std::fs::create_dir_all(output_dir)
        .wrap_err_with(|| eyre!("Failed to create directory: {output_dir:?}"))?;

    Name::iter().try_for_each(|name| {
        let path = name.path(output_dir);
        info!("Writing toy dataset {name}: {path:?}");
        std::fs::write(&path, contents(name)).wrap_err_with(|| eyre!("Failed to write: {path:?}"))
    })
}
