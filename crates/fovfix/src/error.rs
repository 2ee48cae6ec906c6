use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Camera address not resolved (step {step} at {address:#x})")]
    AddressUnresolved { step: usize, address: u64 },

    #[error("Process {pid} exited before a visible window appeared")]
    WindowNotFound { pid: u32 },

    #[error("Field of view at {address:#x} has an unexpected value: {value}")]
    UnexpectedValue { address: u64, value: f32 },

    #[error("Failed to read process memory at address {address:#x}: {message}")]
    MemoryReadFailed { address: u64, message: String },

    #[error("Failed to write process memory at address {address:#x}: {message}")]
    MemoryWriteFailed { address: u64, message: String },

    #[error("Failed to query window size: {0}")]
    WindowSizeFailed(String),

    #[error("Failed to open process: {0}")]
    ProcessOpenFailed(String),

    #[error("Unable to run '{path}': {message}")]
    ProcessLaunchFailed { path: String, message: String },

    #[error("Unable to add required privileges: {0}")]
    PrivilegeFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is part of normal operation and only skips a cycle
    ///
    /// The camera does not exist before the player enters the world, and a
    /// window can be recreated at any time; neither is a reason to stop.
    pub fn is_routine(&self) -> bool {
        matches!(
            self,
            Error::AddressUnresolved { .. }
                | Error::MemoryReadFailed { .. }
                | Error::WindowSizeFailed(_)
        )
    }
}
