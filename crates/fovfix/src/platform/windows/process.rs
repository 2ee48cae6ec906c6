use std::ffi::c_void;
use std::os::windows::io::IntoRawHandle;
use std::path::Path;
use std::process::Command;

use tracing::{debug, info};
use windows::Win32::Foundation::{CloseHandle, HANDLE, STILL_ACTIVE};
use windows::Win32::System::Diagnostics::Debug::{ReadProcessMemory, WriteProcessMemory};
use windows::Win32::System::Threading::{
    GetExitCodeProcess, OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION, PROCESS_VM_OPERATION,
    PROCESS_VM_READ, PROCESS_VM_WRITE,
};

use crate::error::{Error, Result};
use crate::memory::{GameProcess, ReadMemory, WriteMemory};

/// Handle to the game process with query and memory read/write rights
///
/// The handle is closed on drop.
pub struct Win32Process {
    handle: HANDLE,
    pid: u32,
}

impl Win32Process {
    /// Open an already running process by PID.
    pub fn open(pid: u32) -> Result<Self> {
        let access = PROCESS_QUERY_LIMITED_INFORMATION
            | PROCESS_VM_READ
            | PROCESS_VM_WRITE
            | PROCESS_VM_OPERATION;

        // SAFETY: OpenProcess has no preconditions; failure is reported via Result.
        let handle = unsafe { OpenProcess(access, false, pid) }
            .map_err(|e| Error::ProcessOpenFailed(format!("PID {pid}: {e}")))?;

        debug!("Opened process {} (handle {:?})", pid, handle);
        Ok(Self { handle, pid })
    }

    /// Run the executable and keep the handle returned by process creation.
    pub fn launch(path: &Path) -> Result<Self> {
        let child = Command::new(path)
            .spawn()
            .map_err(|e| Error::ProcessLaunchFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let pid = child.id();
        info!("Started {} (PID {})", path.display(), pid);

        // Ownership of the handle moves to Win32Process, which closes it on drop
        let handle = HANDLE(child.into_raw_handle());
        Ok(Self { handle, pid })
    }
}

impl ReadMemory for Win32Process {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; size];
        let mut bytes_read = 0usize;

        // SAFETY: buffer is valid for `size` bytes; the remote address is only
        // touched by the kernel, which validates it.
        unsafe {
            ReadProcessMemory(
                self.handle,
                address as *const c_void,
                buffer.as_mut_ptr() as *mut c_void,
                size,
                Some(&mut bytes_read),
            )
        }
        .map_err(|e| Error::MemoryReadFailed {
            address,
            message: e.to_string(),
        })?;

        if bytes_read != size {
            return Err(Error::MemoryReadFailed {
                address,
                message: format!("partial read ({bytes_read} of {size} bytes)"),
            });
        }

        Ok(buffer)
    }
}

impl WriteMemory for Win32Process {
    fn write_bytes(&self, address: u64, bytes: &[u8]) -> Result<()> {
        let mut bytes_written = 0usize;

        // SAFETY: `bytes` is valid for its length; the kernel validates the
        // remote range.
        unsafe {
            WriteProcessMemory(
                self.handle,
                address as *const c_void,
                bytes.as_ptr() as *const c_void,
                bytes.len(),
                Some(&mut bytes_written),
            )
        }
        .map_err(|e| Error::MemoryWriteFailed {
            address,
            message: e.to_string(),
        })?;

        if bytes_written != bytes.len() {
            return Err(Error::MemoryWriteFailed {
                address,
                message: format!("partial write ({bytes_written} of {} bytes)", bytes.len()),
            });
        }

        Ok(())
    }
}

impl GameProcess for Win32Process {
    fn pid(&self) -> u32 {
        self.pid
    }

    fn is_alive(&self) -> bool {
        let mut exit_code = 0u32;
        // SAFETY: the handle stays open for the lifetime of self.
        match unsafe { GetExitCodeProcess(self.handle, &mut exit_code) } {
            Ok(()) => exit_code == STILL_ACTIVE.0 as u32,
            Err(_) => false,
        }
    }
}

impl Drop for Win32Process {
    fn drop(&mut self) {
        // SAFETY: the handle is owned by self and closed exactly once.
        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}
