//! Launch the game and synchronize its FoV.

use std::path::Path;

use anyhow::Result;

#[cfg(target_os = "windows")]
pub fn run(exe: &Path) -> Result<()> {
    use anyhow::Context;
    use fovfix::prelude::*;
    use tracing::info;

    enable_debug_privilege().context("Make sure to run this as administrator")?;

    let process = Win32Process::launch(exe)?;
    info!("Game process started successfully (PID {}).", process.pid());

    super::synchronize(&process)
}

#[cfg(not(target_os = "windows"))]
pub fn run(_exe: &Path) -> Result<()> {
    anyhow::bail!("Launching the game is only supported on Windows")
}
