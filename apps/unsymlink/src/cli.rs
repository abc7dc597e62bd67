//! Command line interface definition

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// unsymlink - Sort orphan library entries into lib64 and lib
#[derive(Parser)]
#[command(name = "unsymlink")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sort orphan library entries into lib64 and lib")]
#[command(long_about = None)]
pub struct Cli {
    /// Orphan entry names (the built-in fixture list when none are given)
    pub entries: Vec<OsString>,

    /// Read entry names from a list file, one per line ("-" reads stdin)
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Entries in the list file are NUL-separated
    #[arg(short = '0', long, requires = "from_file")]
    pub null: bool,

    /// Extra exact name kept in lib64 (repeatable)
    #[arg(long = "lib64-name", value_name = "NAME")]
    pub lib64_names: Vec<String>,

    /// Use alternate config file
    #[arg(long, value_name = "PATH", env = "UNSYMLINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write JSON debug logs to the logs directory
    #[arg(long)]
    pub debug: bool,
}
