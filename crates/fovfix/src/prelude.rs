//! Prelude module for convenient imports
//!
//! ```ignore
//! use fovfix::prelude::*;
//! ```
//!
//! Brings the loop, its outcome, the calculator and the platform
//! implementations into scope.

// Synchronization loop
pub use crate::sync::{FovSync, SyncOutcome, SyncReport, SyncStats};

// Error handling
pub use crate::error::{Error, Result};

// Geometry
pub use crate::camera::{DEFAULT_FOV, calculate_optimal_fov};
pub use crate::window::WindowSize;

// Platform
pub use crate::memory::GameProcess;
pub use crate::platform::ThreadSleeper;
#[cfg(target_os = "windows")]
pub use crate::platform::{Win32Process, Win32Windows, enable_debug_privilege};
