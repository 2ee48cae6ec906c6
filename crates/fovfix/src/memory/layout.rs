//! Memory layout constants for the game client
//!
//! Offsets are specific to the TBC client build the tool targets.
//!
//! # Camera Pointer Chain
//!
//! ```text
//! Step   Address                          Result
//! ───────────────────────────────────────────────────────────
//! 0      INSTANCE_POINTER                 instance (u32)
//! 1      instance + CAMERA_OFFSET         camera (u32)
//! -      camera + FOV_OFFSET              field of view (f32)
//! ```

/// Camera pointer chain
pub mod camera {
    /// Absolute address of the world instance pointer
    pub const INSTANCE_POINTER: u64 = 0xC6_ECCC;

    /// Offset of the active camera pointer inside the world instance
    pub const CAMERA_OFFSET: u32 = 0x732C;

    /// Offset of the field of view value inside the camera
    pub const FOV_OFFSET: u32 = 0x40;

    /// Offsets applied after each dereference, in walk order
    pub const CHAIN: [u32; 2] = [CAMERA_OFFSET, FOV_OFFSET];
}

/// Timing constants for polling
pub mod timing {
    /// Interval between window lookups while waiting for the game window (ms)
    pub const WINDOW_POLL_INTERVAL_MS: u64 = 250;

    /// Interval between synchronization cycles (ms)
    pub const SYNC_POLL_INTERVAL_MS: u64 = 250;
}
