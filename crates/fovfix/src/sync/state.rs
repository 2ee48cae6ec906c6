use std::fmt;

use crate::camera::DEFAULT_FOV;
use crate::error::Error;
use crate::window::WindowSize;

/// The loop's belief about the FoV it last wrote and the window it was computed for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovState {
    pub value: f32,
    pub size: WindowSize,
}

impl Default for FovState {
    fn default() -> Self {
        Self {
            value: DEFAULT_FOV,
            size: WindowSize::default(),
        }
    }
}

/// How an observed FoV relates to the last written one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drift {
    /// Still holds our value
    None,
    /// The camera was recreated and reset itself to the client default
    Reset,
    /// Neither ours nor the default; the address no longer points at the FoV
    Unexpected,
}

impl FovState {
    pub fn drift(&self, observed: f32) -> Drift {
        if observed == self.value {
            Drift::None
        } else if observed == DEFAULT_FOV {
            Drift::Reset
        } else {
            Drift::Unexpected
        }
    }
}

/// Synchronization loop states
#[derive(Debug)]
pub enum SyncState<H> {
    WaitingForWindow,
    Running { window: H, fov: FovState },
    Terminated(SyncOutcome),
}

impl<H> SyncState<H> {
    pub fn is_terminated(&self) -> bool {
        matches!(self, SyncState::Terminated(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            SyncState::WaitingForWindow => "WaitingForWindow",
            SyncState::Running { .. } => "Running",
            SyncState::Terminated(_) => "Terminated",
        }
    }
}

/// Why the loop stopped
#[derive(Debug)]
pub enum SyncOutcome {
    /// The user closed the game
    GameClosed,
    Failed(Error),
}

impl SyncOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, SyncOutcome::GameClosed)
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            SyncOutcome::GameClosed => None,
            SyncOutcome::Failed(e) => Some(e),
        }
    }
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncOutcome::GameClosed => write!(f, "game closed"),
            SyncOutcome::Failed(e) => write!(f, "failed: {e}"),
        }
    }
}

/// Counters kept for the lifetime of one loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Completed poll cycles in the Running state
    pub cycles: u64,
    /// Cycles skipped because the camera could not be resolved or read
    pub unresolved_cycles: u64,
    pub writes: u64,
    pub window_reacquisitions: u64,
}

#[derive(Debug)]
pub struct SyncReport {
    pub outcome: SyncOutcome,
    pub stats: SyncStats,
}
