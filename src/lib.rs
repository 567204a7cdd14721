mod utils;

pub mod config;
pub mod dnd;
pub mod error;
pub mod focus;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use config::Config;
pub use error::FocusError;
pub use focus::{FocusReport, FocusResolver};

fn init_logging(verbose: bool) {
    // RUST_LOG wins over the default level when set.
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .try_init();
}

/// Resolve the active focus for `config` and write it out.
pub fn execute(config: &Config) -> anyhow::Result<FocusReport> {
    let paths = config.resolve_paths();
    log::debug!(
        "assertions={} modes={} output={}",
        paths.assertions.display(),
        paths.modes.display(),
        paths.output.display()
    );

    let report = FocusResolver::new(&paths.assertions, &paths.modes)
        .run(&paths.output)
        .context("could not determine the current focus")?;

    log::info!(
        "resolved \"{}\" from {} assertion records",
        report.name,
        report.record_count
    );
    Ok(report)
}

pub fn run() -> ExitCode {
    let config = Config::parse();
    init_logging(config.verbose);

    match execute(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}
