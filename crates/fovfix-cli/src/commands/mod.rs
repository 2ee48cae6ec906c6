//! CLI command implementations.

pub mod attach;
pub mod calc;
pub mod run;

#[cfg(target_os = "windows")]
use anyhow::Result;
#[cfg(target_os = "windows")]
use fovfix::prelude::*;

/// Drive the sync loop against a live process until it finishes.
#[cfg(target_os = "windows")]
fn synchronize(process: &Win32Process) -> Result<()> {
    use tracing::info;

    let report = FovSync::new(process, &Win32Windows, &ThreadSleeper).run();

    match report.outcome {
        SyncOutcome::GameClosed => {
            info!("The game was closed, exiting successfully.");
            Ok(())
        }
        SyncOutcome::Failed(e) => Err(anyhow::Error::new(e).context("FoV sync stopped")),
    }
}
