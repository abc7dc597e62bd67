//! Tracing subscriber setup

use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEBUG_FILTER: &str = "info,unsymlink=debug,unsymlink_orphan=debug";
const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing
///
/// Normal runs log warnings to stderr and ignore `RUST_LOG`. With `--debug`,
/// structured JSON logs go to a timestamped file under `log_dir` so they do
/// not interleave with the report; `RUST_LOG` then overrides the file filter.
/// If the log file cannot be created, the run continues with the normal
/// stderr setup.
pub fn init_tracing(debug_enabled: bool, log_dir: &Path) {
    if !debug_enabled {
        init_stderr();
        return;
    }

    match create_log_file(log_dir) {
        Ok((file, log_file)) => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(file)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(DEBUG_FILTER)),
                )
                .init();

            info!(log_file = %log_file.display(), "Debug logging enabled");
        }
        Err(e) => {
            init_stderr();
            warn!(
                log_dir = %log_dir.display(),
                error = %e,
                "Failed to create debug log file, debug logging disabled"
            );
        }
    }
}

fn init_stderr() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .init();
}

fn create_log_file(log_dir: &Path) -> std::io::Result<(File, PathBuf)> {
    std::fs::create_dir_all(log_dir)?;
    let log_file = log_dir.join(format!(
        "unsymlink-{}.log",
        chrono::Utc::now().format("%Y%m%d-%H%M%S")
    ));
    let file = File::create(&log_file)?;
    Ok((file, log_file))
}
