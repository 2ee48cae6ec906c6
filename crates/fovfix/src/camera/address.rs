//! Pointer chain resolution for the camera FoV.

use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};
use crate::memory::ReadMemory;
use crate::memory::layout::camera;

/// A fixed sequence of dereference steps inside a 32-bit address space
///
/// Starting at `base`, each step reads a 32-bit pointer at the current
/// address and adds the step's offset to it. The address left after the last
/// step is the target; it is never dereferenced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerChain {
    pub base: u64,
    pub offsets: &'static [u32],
}

impl PointerChain {
    /// World instance -> active camera -> field of view
    pub const CAMERA_FOV: PointerChain =
        PointerChain::new(camera::INSTANCE_POINTER, &camera::CHAIN);

    pub const fn new(base: u64, offsets: &'static [u32]) -> Self {
        Self { base, offsets }
    }

    pub fn depth(&self) -> usize {
        self.offsets.len()
    }
}

impl Default for PointerChain {
    fn default() -> Self {
        Self::CAMERA_FOV
    }
}

/// Address of the FoV float in the game process
///
/// Only valid until the camera object is recreated; re-resolve every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetAddress(pub u64);

impl TargetAddress {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TargetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Walk the chain and return the current FoV address.
///
/// Fails with [`Error::AddressUnresolved`] if any link cannot be read or is
/// null. That is the normal state until the player is in the world.
pub fn resolve_fov_address<R: ReadMemory + ?Sized>(
    reader: &R,
    chain: &PointerChain,
) -> Result<TargetAddress> {
    let mut address = chain.base;

    for (step, &offset) in chain.offsets.iter().enumerate() {
        let pointer = match reader.read_u32(address) {
            Ok(0) => return Err(Error::AddressUnresolved { step, address }),
            Ok(pointer) => pointer,
            Err(e) => {
                trace!("Pointer chain step {} at {:#x} unreadable: {}", step, address, e);
                return Err(Error::AddressUnresolved { step, address });
            }
        };
        // Pointers are 32-bit; the sum wraps like the client's own arithmetic
        address = u64::from(pointer.wrapping_add(offset));
    }

    Ok(TargetAddress(address))
}
