use crate::error::{Error, Result};

/// Raw read access to a foreign address space
pub trait ReadMemory {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>>;

    fn read_u32(&self, address: u64) -> Result<u32> {
        Ok(u32::from_le_bytes(read_word(self, address)?))
    }

    fn read_f32(&self, address: u64) -> Result<f32> {
        Ok(f32::from_le_bytes(read_word(self, address)?))
    }
}

/// Raw write access to a foreign address space
pub trait WriteMemory {
    fn write_bytes(&self, address: u64, bytes: &[u8]) -> Result<()>;

    fn write_f32(&self, address: u64, value: f32) -> Result<()> {
        self.write_bytes(address, &value.to_le_bytes())
    }
}

/// A running process whose memory the loop reads and patches
pub trait GameProcess: ReadMemory + WriteMemory {
    fn pid(&self) -> u32;

    /// Must be checked before every operation that touches the process.
    fn is_alive(&self) -> bool;
}

fn read_word<R: ReadMemory + ?Sized>(reader: &R, address: u64) -> Result<[u8; 4]> {
    let bytes = reader.read_bytes(address, 4)?;
    bytes
        .get(..4)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| Error::MemoryReadFailed {
            address,
            message: format!("short read ({} of 4 bytes)", bytes.len()),
        })
}
