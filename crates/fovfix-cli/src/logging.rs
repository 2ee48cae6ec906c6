//! Diagnostic output setup.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

pub const DEFAULT_LOG_FILE: &str = "fovfix.log";

/// Install the global subscriber, writing to `log_file` or stderr for `-`.
pub fn init(log_file: &str) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("fovfix=info".parse()?);

    if log_file == "-" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        let file = open_log_file(Path::new(log_file))?;
        file_subscriber(filter, file).init();
    }

    Ok(())
}

fn file_subscriber(filter: EnvFilter, file: File) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish()
}

/// Create or truncate the log file.
fn open_log_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Unable to open log file {}", path.display()))
}
