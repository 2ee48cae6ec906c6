//! # fovfix
//!
//! Core library for the FoV fixer.
//!
//! This crate provides:
//! - Aspect-ratio based field of view calculation
//! - Pointer chain resolution inside a foreign process
//! - Game window tracking
//! - The synchronization loop that keeps the camera FoV in line with the window
//!
//! Everything that touches the operating system goes through the capability
//! traits in [`memory`], [`window`] and [`platform`], so the loop itself is
//! platform independent. The Win32 implementations live in [`platform`].

pub mod camera;
pub mod error;
pub mod memory;
pub mod platform;
pub mod prelude;
pub mod sync;
pub mod window;

pub use camera::{
    DEFAULT_FOV, MAX_FOV, MIN_FOV, PointerChain, TargetAddress, calculate_optimal_fov,
    resolve_fov_address,
};
pub use error::{Error, Result};
pub use memory::{GameProcess, ReadMemory, WriteMemory};
pub use platform::{Sleeper, ThreadSleeper};
#[cfg(target_os = "windows")]
pub use platform::{Win32Process, Win32Windows, enable_debug_privilege};
pub use sync::{FovState, FovSync, SyncOutcome, SyncReport, SyncState, SyncStats};
pub use window::{WindowSize, WindowSystem, find_window, wait_for_window, window_size};
