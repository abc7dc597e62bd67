//! unsymlink - sort orphan library entries into lib64 and lib
//!
//! Entries found in the 64-bit library tree but owned by no package are
//! classified, split into the entries that stay and the entries that move,
//! and reported on stderr. Nothing on disk is touched.

mod cli;
mod error;
mod input;
mod logging;

use crate::cli::Cli;
use crate::error::CliError;
use crate::input::CandidateSource;
use clap::Parser;
use std::process;
use tracing::{error, info};
use unsymlink_config::Config;
use unsymlink_orphan::{Lib64Rules, Reporter};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    logging::init_tracing(cli.debug, &config.logs_dir());
    info!(
        config_file = ?cli.config,
        lib64_extensions = ?config.classify.lib64_extensions,
        versioned_marker = %config.classify.versioned_marker,
        lib64_names = ?config.classify.lib64_names,
        "Configuration loaded"
    );

    if let Err(e) = run(&cli, &config) {
        error!("Application error: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Load configuration with proper precedence:
/// defaults, then file, then environment, then CLI flags
fn load_config(cli: &Cli) -> Result<Config, CliError> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    config.merge_env()?;
    config.add_lib64_names(cli.lib64_names.iter().cloned())?;
    Ok(config)
}

/// Build candidate set, partition, report
fn run(cli: &Cli, config: &Config) -> Result<(), CliError> {
    info!("Starting unsymlink v{}", env!("CARGO_PKG_VERSION"));

    let source = CandidateSource {
        entries: &cli.entries,
        list_file: cli.from_file.as_deref(),
        null_separated: cli.null,
    };
    let candidates = source.load()?;

    let rules = Lib64Rules::from_config(&config.classify);
    let partition = rules.partition(candidates);

    let mut reporter = Reporter::new(std::io::stderr().lock());
    let summary = reporter.report_partition(&partition)?;

    info!(
        moved = summary.moved,
        kept = summary.kept,
        "Report completed"
    );
    Ok(())
}
