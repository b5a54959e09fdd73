use crate::dataset::{choose, load, prepare, toy, DataError, Datasets, Name};
use color_eyre::eyre::{Report, Result};
use tempfile::TempDir;

fn toy_dir() -> Result<TempDir, Report> {
    let dir = tempfile::tempdir()?;
    toy::write(&dir)?;
    Ok(dir)
}

fn data_error(report: &Report) -> Option<&DataError> {
    report.downcast_ref::<DataError>()
}

fn positions(table: &snpview_table::Table<String>) -> Result<Vec<u64>, Report> {
    table.get_column(prepare::POS)?.into_iter().map(|p| Ok(p.parse::<u64>()?)).collect()
}

#[test]
fn load_missing_file() -> Result<(), Report> {
    let dir = tempfile::tempdir()?;
    let observed = load(Name::MainDf, &dir).unwrap_err();
    let expected = DataError::NotFound { path: Name::MainDf.path(&dir) };
    assert_eq!(data_error(&observed), Some(&expected));
    Ok(())
}

#[test]
fn load_ragged_file() -> Result<(), Report> {
    let dir = toy_dir()?;
    std::fs::write(Name::SnpDf.path(&dir), "POS,REF\n100,A,G\n")?;
    let observed = load(Name::SnpDf, &dir).unwrap_err();
    assert!(matches!(data_error(&observed), Some(DataError::Malformed { .. })));
    Ok(())
}

#[test]
fn load_fails_without_partial_result() -> Result<(), Report> {
    let dir = toy_dir()?;
    std::fs::remove_file(Name::MutpredResults.path(&dir))?;
    let observed = Datasets::load(&dir).unwrap_err();
    assert!(matches!(data_error(&observed), Some(DataError::NotFound { .. })));
    Ok(())
}

#[test]
fn samples_drop_masked_and_sort() -> Result<(), Report> {
    let datasets = Datasets::load(&toy_dir()?)?;
    let samples = &datasets.samples;

    assert_eq!(samples.headers, prepare::SAMPLE_COLUMNS);
    assert_eq!(positions(samples)?, [100, 100, 900, 2500, 3100, 3400]);
    assert_eq!(samples.get_column(prepare::GENOME)?, [&"G1", &"G2", &"G2", &"G2", &"G3", &"G2"]);
    assert_eq!(samples.index, [0, 1, 2, 3, 4, 5]);
    Ok(())
}

#[test]
fn snps_drop_masked_and_sort() -> Result<(), Report> {
    let datasets = Datasets::load(&toy_dir()?)?;
    let snps = &datasets.snps;

    assert_eq!(snps.headers, prepare::SNP_COLUMNS);
    // 1500 is masked
    assert_eq!(positions(snps)?, [100, 900, 2500, 3100, 3400]);
    assert_eq!(snps.index, (0..5).collect::<Vec<_>>());
    Ok(())
}

#[test]
fn predictions_sorted_without_comment() -> Result<(), Report> {
    let datasets = Datasets::load(&toy_dir()?)?;
    let predictions = &datasets.predictions;

    assert_eq!(predictions.headers, ["gene", "substitution", "mutpred2_score", "molecular_mechanisms"]);
    assert_eq!(predictions.get_column("gene")?, [&"gyrA", &"gyrA", &"rpoB"]);
    // equal genes keep their file order
    assert_eq!(predictions.get_column("substitution")?, [&"G300D", &"T5A", &"A7E"]);
    assert_eq!(predictions.index, [0, 1, 2]);
    Ok(())
}

#[test]
fn prepare_is_repeatable() -> Result<(), Report> {
    let dir = toy_dir()?;
    let first = Datasets::load(&dir)?;
    let second = Datasets::load(&dir)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn init_prepares_once() -> Result<(), Report> {
    let dir = toy_dir()?;
    let first = Datasets::init(&dir)?;
    // the shared tables are not read again
    let second = Datasets::init(&"does/not/exist")?;
    assert!(std::ptr::eq(first, second));
    assert_eq!(first, &Datasets::load(&dir)?);
    Ok(())
}

#[test]
fn missing_column() -> Result<(), Report> {
    let dir = toy_dir()?;
    std::fs::write(Name::MainDf.path(&dir), "genome,POS,masked_snp\nG1,100,False\n")?;
    let observed = Datasets::load(&dir).unwrap_err();
    let expected =
        DataError::MissingColumn { column: "REF".to_string(), path: Name::MainDf.path(&dir) };
    assert_eq!(data_error(&observed), Some(&expected));
    Ok(())
}

#[test]
fn invalid_mask_flag() -> Result<(), Report> {
    let mut raw = load(Name::SnpDf, &toy_dir()?)?;
    let masked = raw.get_header_index(prepare::MASKED)?;
    raw.rows[0][masked] = "perhaps".to_string();
    let observed = prepare::snps(raw).unwrap_err();
    assert!(matches!(data_error(&observed), Some(DataError::Malformed { .. })));
    Ok(())
}

#[test]
fn invalid_position() -> Result<(), Report> {
    let mut raw = load(Name::MainDf, &toy_dir()?)?;
    let pos = raw.get_header_index(prepare::POS)?;
    raw.rows[1][pos] = "1e3".to_string();
    let observed = prepare::samples(raw).unwrap_err();
    assert!(matches!(data_error(&observed), Some(DataError::Malformed { .. })));
    Ok(())
}

#[test]
fn selection_lists() -> Result<(), Report> {
    let datasets = Datasets::load(&toy_dir()?)?;
    assert_eq!(datasets.genomes()?, ["G1", "G2", "G3"]);
    // the intergenic SNP has no gene
    assert_eq!(datasets.genes()?, ["gyrA", "katG", "rpoB"]);
    Ok(())
}

#[test]
fn selection_lists_sorted_and_distinct() -> Result<(), Report> {
    let datasets = Datasets::load(&toy_dir()?)?;
    for list in [datasets.genomes()?, datasets.genes()?] {
        assert!(list.windows(2).all(|pair| pair[0] < pair[1]));
    }
    Ok(())
}

#[test]
fn choose_from_list() -> Result<(), Report> {
    let values = vec!["G1".to_string(), "G2".to_string()];
    assert_eq!(choose("genome", &values, None)?, "G1");
    assert_eq!(choose("genome", &values, Some("G2"))?, "G2");

    let observed = choose("genome", &values, Some("G9")).unwrap_err();
    let expected = DataError::UnknownSelection { what: "genome".into(), value: "G9".into() };
    assert_eq!(data_error(&observed), Some(&expected));

    let observed = choose("genome", &[], None).unwrap_err();
    let expected = DataError::EmptySelection { what: "genome".into() };
    assert_eq!(data_error(&observed), Some(&expected));
    Ok(())
}
