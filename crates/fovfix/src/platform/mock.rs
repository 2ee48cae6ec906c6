//! Scripted fake game for testing
//!
//! Implements every capability the loop needs. Sleeping advances a tick
//! counter instead of blocking and applies the events scheduled for that tick,
//! so a whole session (login screen, relog, resize, exit) plays out instantly.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use super::Sleeper;
use crate::error::{Error, Result};
use crate::memory::layout::camera;
use crate::memory::{GameProcess, ReadMemory, WriteMemory};
use crate::window::{WindowSize, WindowSystem};

pub const PID: u32 = 4242;
pub const INSTANCE_ADDRESS: u32 = 0x0100_0000;
pub const CAMERA_ADDRESS: u32 = 0x0200_0000;
pub const FOV_ADDRESS: u64 = CAMERA_ADDRESS as u64 + camera::FOV_OFFSET as u64;

/// Address holding the camera pointer inside the instance
pub const CAMERA_SLOT: u64 = INSTANCE_ADDRESS as u64 + camera::CAMERA_OFFSET as u64;

#[derive(Debug, Clone)]
pub enum Event {
    MapU32(u64, u32),
    MapF32(u64, f32),
    Unmap(u64),
    ShowWindow(u32, WindowSize),
    Resize(WindowSize),
    DestroyWindow,
    FailWrites,
    Exit,
}

#[derive(Default)]
struct State {
    memory: HashMap<u64, u8>,
    window: Option<(u32, WindowSize)>,
    exited: bool,
    fail_writes: bool,
    ticks: usize,
    sleeps: Vec<Duration>,
    schedule: Vec<(usize, Event)>,
    writes: Vec<(u64, Vec<u8>)>,
}

impl State {
    fn apply(&mut self, event: Event) {
        match event {
            Event::MapU32(address, value) => self.map(address, &value.to_le_bytes()),
            Event::MapF32(address, value) => self.map(address, &value.to_le_bytes()),
            Event::Unmap(address) => {
                for i in 0..4 {
                    self.memory.remove(&(address + i));
                }
            }
            Event::ShowWindow(handle, size) => self.window = Some((handle, size)),
            Event::Resize(size) => {
                if let Some((_, current)) = self.window.as_mut() {
                    *current = size;
                }
            }
            Event::DestroyWindow => self.window = None,
            Event::FailWrites => self.fail_writes = true,
            Event::Exit => {
                // Windows and memory go away with the process
                self.exited = true;
                self.window = None;
                self.memory.clear();
            }
        }
    }

    fn map(&mut self, address: u64, bytes: &[u8]) {
        for (i, b) in bytes.iter().enumerate() {
            self.memory.insert(address + i as u64, *b);
        }
    }
}

pub struct FakeGame {
    state: RefCell<State>,
}

impl FakeGame {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(State::default()),
        }
    }

    /// A game in the world: camera chain mapped, FoV holding `fov`.
    pub fn in_world(fov: f32) -> Self {
        let game = Self::new();
        game.map_u32(camera::INSTANCE_POINTER, INSTANCE_ADDRESS);
        game.map_u32(CAMERA_SLOT, CAMERA_ADDRESS);
        game.map_f32(FOV_ADDRESS, fov);
        game
    }

    pub fn map_u32(&self, address: u64, value: u32) {
        self.state.borrow_mut().apply(Event::MapU32(address, value));
    }

    pub fn map_f32(&self, address: u64, value: f32) {
        self.state.borrow_mut().apply(Event::MapF32(address, value));
    }

    pub fn show_window(&self, handle: u32, size: WindowSize) {
        self.state.borrow_mut().apply(Event::ShowWindow(handle, size));
    }

    pub fn destroy_window(&self) {
        self.state.borrow_mut().apply(Event::DestroyWindow);
    }

    /// Apply `event` when the sleeper reaches `tick` (1-based).
    pub fn schedule(&self, tick: usize, event: Event) {
        self.state.borrow_mut().schedule.push((tick, event));
    }

    pub fn fov(&self) -> Option<f32> {
        self.read_f32(FOV_ADDRESS).ok()
    }

    pub fn ticks(&self) -> usize {
        self.state.borrow().ticks
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.state.borrow().sleeps.clone()
    }

    pub fn writes(&self) -> Vec<(u64, Vec<u8>)> {
        self.state.borrow().writes.clone()
    }
}

impl ReadMemory for FakeGame {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        let state = self.state.borrow();
        (0..size as u64)
            .map(|i| {
                state
                    .memory
                    .get(&(address + i))
                    .copied()
                    .ok_or_else(|| Error::MemoryReadFailed {
                        address,
                        message: "unmapped".to_string(),
                    })
            })
            .collect()
    }
}

impl WriteMemory for FakeGame {
    fn write_bytes(&self, address: u64, bytes: &[u8]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let mapped = (0..bytes.len() as u64).all(|i| state.memory.contains_key(&(address + i)));
        if state.fail_writes || !mapped {
            return Err(Error::MemoryWriteFailed {
                address,
                message: "access denied".to_string(),
            });
        }
        state.map(address, bytes);
        state.writes.push((address, bytes.to_vec()));
        Ok(())
    }
}

impl GameProcess for FakeGame {
    fn pid(&self) -> u32 {
        PID
    }

    fn is_alive(&self) -> bool {
        !self.state.borrow().exited
    }
}

impl WindowSystem for FakeGame {
    type Handle = u32;

    fn find_visible_window(&self, pid: u32) -> Option<u32> {
        if pid != PID {
            return None;
        }
        self.state.borrow().window.map(|(handle, _)| handle)
    }

    fn client_size(&self, window: u32) -> Result<WindowSize> {
        match self.state.borrow().window {
            Some((handle, size)) if handle == window => Ok(size),
            _ => Err(Error::WindowSizeFailed(format!("invalid window {window}"))),
        }
    }
}

impl Sleeper for FakeGame {
    fn sleep(&self, duration: Duration) {
        let mut state = self.state.borrow_mut();
        state.ticks += 1;
        state.sleeps.push(duration);

        let tick = state.ticks;
        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut state.schedule)
            .into_iter()
            .partition(|(at, _)| *at == tick);
        state.schedule = pending;
        for (_, event) in due {
            state.apply(event);
        }
    }
}
