// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use gostats::{Config, GoGatherer, Gatherer, cli::Args, presentation};

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(config: &Config) -> anyhow::Result<()> {
    let gatherer = GoGatherer::new(config)?;
    let report = gatherer.gather(&config.root)?;

    let mut out = io::stdout().lock();
    presentation::render(&report, config.format, &mut out)?;
    out.flush()?;

    presentation::render_skipped(&report, &mut io::stderr().lock())?;
    Ok(())
}

fn main() -> ExitCode {
    let config = match Config::try_from(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };
    init_logger(config.verbose);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
