//! Platform layer
//!
//! Concrete implementations of the capability traits the loop consumes:
//! - Suspension between poll cycles ([`Sleeper`])
//! - Foreign process memory and liveness (`Win32Process`)
//! - Window enumeration and geometry (`Win32Windows`)
//! - Debug privilege acquisition (`enable_debug_privilege`)

use std::time::Duration;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub use self::windows::{Win32Process, Win32Windows, enable_debug_privilege};

#[cfg(test)]
pub(crate) mod mock;

/// The loop's only suspension point
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Sleeps the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
