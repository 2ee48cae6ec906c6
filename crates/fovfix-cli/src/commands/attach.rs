//! Synchronize the FoV of an already running game.

use anyhow::Result;

#[cfg(target_os = "windows")]
pub fn run(pid: u32) -> Result<()> {
    use anyhow::Context;
    use fovfix::prelude::*;
    use tracing::info;

    enable_debug_privilege().context("Make sure to run this as administrator")?;

    let process = Win32Process::open(pid)?;
    if !process.is_alive() {
        anyhow::bail!("Process {} is not running", pid);
    }
    info!("Attached to game process (PID {}).", pid);

    super::synchronize(&process)
}

#[cfg(not(target_os = "windows"))]
pub fn run(_pid: u32) -> Result<()> {
    anyhow::bail!("Attaching to a process is only supported on Windows")
}
