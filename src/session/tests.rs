use crate::dataset::{toy, Datasets, Name};
use crate::session::{parse_option, Session, SUBHEADER, TITLE};
use crate::view::{MenuOption, WELCOME};
use color_eyre::eyre::{Report, Result};

fn toy_datasets() -> Result<Datasets, Report> {
    let dir = tempfile::tempdir()?;
    toy::write(&dir)?;
    Datasets::load(&dir)
}

/// Run a session over scripted `input`, returning everything it printed.
fn run(datasets: &Datasets, input: &str) -> Result<String, Report> {
    let mut output = Vec::new();
    Session::new(datasets, input.as_bytes(), &mut output).run()?;
    Ok(String::from_utf8(output)?)
}

#[test]
fn title_and_menu() -> Result<(), Report> {
    let output = run(&toy_datasets()?, "q\n")?;
    assert!(output.starts_with(&format!("{TITLE}\n{SUBHEADER}\n")));
    assert!(output.contains("Dashboard options\n  0) Select...\n  1) Specific genome\n"));
    assert!(output.contains("  5) Help\n"));
    assert!(!output.contains(WELCOME));
    Ok(())
}

#[test]
fn ends_at_end_of_input() -> Result<(), Report> {
    let output = run(&toy_datasets()?, "")?;
    assert_eq!(output.matches("Dashboard options").count(), 1);

    // also while choosing a genome
    let output = run(&toy_datasets()?, "1\n")?;
    assert!(output.contains("Choose a genome"));
    assert!(!output.contains("Genome:"));
    Ok(())
}

#[test]
fn genome_by_number() -> Result<(), Report> {
    let output = run(&toy_datasets()?, "1\n2\nquit\n")?;
    assert!(output.contains("Choose a genome\n  1) G1\n  2) G2\n  3) G3\n"));
    assert!(output.contains("Genome: G2\n"));
    assert!(output.contains("SNP count: 4\n"));
    // the menu is shown again after the view
    assert_eq!(output.matches("Dashboard options").count(), 2);
    Ok(())
}

#[test]
fn gene_by_label_and_default() -> Result<(), Report> {
    let output = run(&toy_datasets()?, "Specific gene\n\n")?;
    assert!(output.contains("Choose a gene"));
    assert!(output.contains("Gene: gyrA\n"));

    let output = run(&toy_datasets()?, "Specific gene\nrpoB\n")?;
    assert!(output.contains("Gene: rpoB\n"));
    assert!(output.contains("Total SNP count: 1\n"));
    Ok(())
}

#[test]
fn invalid_choice_prompts_again() -> Result<(), Report> {
    let output = run(&toy_datasets()?, "1\nG9\n0\nG3\n")?;
    assert!(output.contains("Invalid genome: G9\n"));
    assert!(output.contains("Invalid genome: 0\n"));
    assert_eq!(output.matches("Choose a genome").count(), 3);
    assert!(output.contains("Genome: G3\n"));
    Ok(())
}

#[test]
fn unknown_option_shows_welcome() -> Result<(), Report> {
    let output = run(&toy_datasets()?, "Plot\n9\n0\n")?;
    assert_eq!(output.matches(WELCOME).count(), 3);
    Ok(())
}

#[test]
fn tables_and_help() -> Result<(), Report> {
    let output = run(&toy_datasets()?, "3\nCharacteristic SNPs\n5\n")?;
    assert!(output.contains("SNP List\n--------\n"));
    assert!(output.contains("Characteristic SNPs\n-------------------\n"));
    assert!(output.contains("G300D"));
    assert!(output.contains("Help\n----\n"));
    Ok(())
}

#[test]
fn render_error_continues() -> Result<(), Report> {
    let dir = tempfile::tempdir()?;
    toy::write(&dir)?;
    let header = toy::MAIN_DF.lines().next().unwrap_or_default();
    std::fs::write(Name::MainDf.path(&dir), format!("{header}\n"))?;
    let datasets = Datasets::load(&dir)?;

    let output = run(&datasets, "1\n5\n")?;
    assert!(!output.contains("Choose a genome"));
    assert!(output.contains("Error: There is no genome to choose from.\n"));
    assert!(output.contains("Help\n----\n"));
    Ok(())
}

#[test]
fn parse_menu_answers() {
    assert_eq!(parse_option("0"), MenuOption::Unselected);
    assert_eq!(parse_option("1"), MenuOption::SpecificGenome);
    assert_eq!(parse_option("Specific gene"), MenuOption::SpecificGene);
    assert_eq!(parse_option("-1"), MenuOption::Unselected);
    assert_eq!(parse_option("snp list"), MenuOption::Unselected);
}
