//! Game window tracking.
//!
//! Locates the visible top-level window owned by the game process, waits for
//! it to appear, and reports its client-area size.

use std::fmt;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::memory::GameProcess;
use crate::memory::layout::timing;
use crate::platform::Sleeper;

/// Client-area dimensions of a window in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Window enumeration and geometry queries
pub trait WindowSystem {
    /// Borrowed reference to a window; never owned or destroyed by us.
    type Handle: Copy + PartialEq + fmt::Debug;

    /// First visible top-level window owned by `pid`, in enumeration order.
    fn find_visible_window(&self, pid: u32) -> Option<Self::Handle>;

    /// Both dimensions of the client area, or an error if the handle is stale.
    fn client_size(&self, window: Self::Handle) -> Result<WindowSize>;
}

/// Find the visible main window of the game process.
pub fn find_window<P, W>(process: &P, windows: &W) -> Option<W::Handle>
where
    P: GameProcess + ?Sized,
    W: WindowSystem + ?Sized,
{
    windows.find_visible_window(process.pid())
}

/// Block until the game process shows a window.
///
/// Polls every [`timing::WINDOW_POLL_INTERVAL_MS`]. Fails with
/// [`Error::WindowNotFound`] if the process exits first.
pub fn wait_for_window<P, W, S>(process: &P, windows: &W, sleeper: &S) -> Result<W::Handle>
where
    P: GameProcess + ?Sized,
    W: WindowSystem + ?Sized,
    S: Sleeper + ?Sized,
{
    if let Some(window) = find_window(process, windows) {
        debug!("Found window {:?} for PID {}", window, process.pid());
        return Ok(window);
    }

    debug!("Waiting for a window of PID {}...", process.pid());
    loop {
        sleeper.sleep(Duration::from_millis(timing::WINDOW_POLL_INTERVAL_MS));

        if !process.is_alive() {
            return Err(Error::WindowNotFound { pid: process.pid() });
        }

        if let Some(window) = find_window(process, windows) {
            info!("Game window appeared ({:?})", window);
            return Ok(window);
        }
    }
}

/// Query the client-area size of a tracked window.
pub fn window_size<W>(windows: &W, window: W::Handle) -> Result<WindowSize>
where
    W: WindowSystem + ?Sized,
{
    windows.client_size(window)
}
