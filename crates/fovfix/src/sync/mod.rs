//! FoV synchronization loop.
//!
//! A three-state machine:
//!
//! ```text
//! WaitingForWindow ──window──▶ Running ──process gone──▶ Terminated(GameClosed)
//!        │                      │  ▲
//!        │                      │  └── every 250 ms: resolve, check drift, resize, write
//!        └──process gone──▶ Terminated(Failed) ◀── unexpected value / write error / window lost
//! ```
//!
//! A cycle in `Running` never writes to an address whose value it cannot
//! explain: the value must be either the one we wrote last or the client's
//! default (a freshly created camera). Anything else aborts the loop.

mod state;

use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::camera::{PointerChain, calculate_optimal_fov, resolve_fov_address};
use crate::error::Error;
use crate::memory::GameProcess;
use crate::memory::layout::timing;
use crate::platform::Sleeper;
use crate::window::{WindowSystem, wait_for_window, window_size};

pub use state::{Drift, FovState, SyncOutcome, SyncReport, SyncState, SyncStats};

/// The synchronization loop and its context
///
/// Owns everything that lives for one run: the current state (window handle
/// and FoV belief included) and the counters. Platform capabilities are
/// borrowed.
pub struct FovSync<'a, P, W, S>
where
    P: GameProcess + ?Sized,
    W: WindowSystem + ?Sized,
    S: Sleeper + ?Sized,
{
    process: &'a P,
    windows: &'a W,
    sleeper: &'a S,
    chain: PointerChain,
    state: SyncState<W::Handle>,
    stats: SyncStats,
}

impl<'a, P, W, S> FovSync<'a, P, W, S>
where
    P: GameProcess + ?Sized,
    W: WindowSystem + ?Sized,
    S: Sleeper + ?Sized,
{
    pub fn new(process: &'a P, windows: &'a W, sleeper: &'a S) -> Self {
        Self {
            process,
            windows,
            sleeper,
            chain: PointerChain::default(),
            state: SyncState::WaitingForWindow,
            stats: SyncStats::default(),
        }
    }

    /// Use a different pointer chain to locate the FoV
    pub fn with_chain(mut self, chain: PointerChain) -> Self {
        self.chain = chain;
        self
    }

    pub fn state(&self) -> &SyncState<W::Handle> {
        &self.state
    }

    pub fn stats(&self) -> SyncStats {
        self.stats
    }

    /// Perform one transition. A terminated loop stays terminated.
    pub fn step(&mut self) -> &SyncState<W::Handle> {
        let current = std::mem::replace(&mut self.state, SyncState::WaitingForWindow);
        self.state = self.transition(current);
        &self.state
    }

    /// Run until the process exits or a fatal error occurs.
    pub fn run(mut self) -> SyncReport {
        info!("Synchronizing FoV for PID {}", self.process.pid());

        let mut state = std::mem::replace(&mut self.state, SyncState::WaitingForWindow);
        let outcome = loop {
            state = match state {
                SyncState::Terminated(outcome) => break outcome,
                other => self.transition(other),
            };
        };

        info!(
            "Sync finished after {} cycles ({} writes, {} skipped, {} window re-acquisitions)",
            self.stats.cycles,
            self.stats.writes,
            self.stats.unresolved_cycles,
            self.stats.window_reacquisitions
        );

        SyncReport {
            outcome,
            stats: self.stats,
        }
    }

    fn transition(&mut self, state: SyncState<W::Handle>) -> SyncState<W::Handle> {
        let next = match state {
            SyncState::WaitingForWindow => self.acquire_window(),
            SyncState::Running { window, fov } => self.cycle(window, fov),
            terminated @ SyncState::Terminated(_) => return terminated,
        };

        if let SyncState::Terminated(outcome) = &next {
            match outcome {
                SyncOutcome::GameClosed => info!("The game was closed"),
                SyncOutcome::Failed(e) => error!("Stopping FoV sync: {}", e),
            }
        }
        next
    }

    fn acquire_window(&mut self) -> SyncState<W::Handle> {
        match wait_for_window(self.process, self.windows, self.sleeper) {
            Ok(window) => {
                info!("Tracking game window {:?}", window);
                SyncState::Running {
                    window,
                    fov: FovState::default(),
                }
            }
            Err(e) => SyncState::Terminated(SyncOutcome::Failed(e)),
        }
    }

    fn cycle(&mut self, window: W::Handle, mut fov: FovState) -> SyncState<W::Handle> {
        if !self.process.is_alive() {
            return SyncState::Terminated(SyncOutcome::GameClosed);
        }

        self.sleeper.sleep(Duration::from_millis(timing::SYNC_POLL_INTERVAL_MS));
        self.stats.cycles += 1;

        // No camera before the player is in the world
        let read = resolve_fov_address(self.process, &self.chain)
            .and_then(|address| Ok((address, self.process.read_f32(address.get())?)));
        let (address, observed) = match read {
            Ok(read) => read,
            Err(e) if e.is_routine() => {
                debug!("Skipping cycle: {}", e);
                self.stats.unresolved_cycles += 1;
                return SyncState::Running { window, fov };
            }
            Err(e) => return SyncState::Terminated(SyncOutcome::Failed(e)),
        };

        let mut needs_update = false;
        match fov.drift(observed) {
            Drift::None => {}
            Drift::Reset => {
                debug!("FoV at {} was reset to the default", address);
                needs_update = true;
            }
            Drift::Unexpected => {
                return SyncState::Terminated(SyncOutcome::Failed(Error::UnexpectedValue {
                    address: address.get(),
                    value: observed,
                }));
            }
        }

        let size = match window_size(self.windows, window) {
            Ok(size) => size,
            Err(e) => {
                warn!("Lost the game window ({}), searching again", e);
                self.stats.window_reacquisitions += 1;
                return match wait_for_window(self.process, self.windows, self.sleeper) {
                    Ok(window) => SyncState::Running { window, fov },
                    Err(e) => SyncState::Terminated(SyncOutcome::Failed(e)),
                };
            }
        };

        if size != fov.size {
            debug!("Window size changed: {} -> {}", fov.size, size);
            fov.size = size;
            needs_update = true;
        }

        if needs_update {
            let value = calculate_optimal_fov(size.width, size.height);
            if let Err(e) = self.process.write_f32(address.get(), value) {
                return SyncState::Terminated(SyncOutcome::Failed(e));
            }
            fov.value = value;
            self.stats.writes += 1;
            info!(
                "Changing FoV to: {:.2} (window size {})",
                value.to_degrees(),
                size
            );
        }

        SyncState::Running { window, fov }
    }
}
