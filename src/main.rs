use clap::Parser;
use color_eyre::eyre::{Report, Result};
use snpview::{utils, Cli, Datasets, Session};

fn main() -> Result<(), Report> {
    // ------------------------------------------------------------------------
    // CLI Setup

    // Parse CLI parameters
    let args = Cli::parse();

    // initialize color_eyre crate for colorized logs
    color_eyre::install()?;

    // Set logging/verbosity level via RUST_LOG
    std::env::set_var("RUST_LOG", args.verbosity.to_string());

    // initialize env_logger crate for logging/verbosity level
    env_logger::init();

    // ------------------------------------------------------------------------
    // Dashboard

    let data_dir = match args.data_dir {
        Some(data_dir) => data_dir,
        None => utils::default_data_dir()?,
    };
    let datasets = Datasets::init(&data_dir)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(datasets, stdin.lock(), stdout.lock()).run()
}
