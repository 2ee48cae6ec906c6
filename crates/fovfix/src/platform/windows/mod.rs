//! Win32 implementations of the platform capabilities.

mod privilege;
mod process;
mod window;

pub use privilege::enable_debug_privilege;
pub use process::Win32Process;
pub use window::Win32Windows;
