use windows::Win32::Foundation::{BOOL, HWND, LPARAM, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetClientRect, GetWindowThreadProcessId, IsWindowVisible,
};

use crate::error::{Error, Result};
use crate::window::{WindowSize, WindowSystem};

/// Top-level window enumeration through user32
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Windows;

struct EnumState {
    pid: u32,
    found: Option<HWND>,
}

unsafe extern "system" fn enum_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the &mut EnumState passed by find_visible_window,
    // alive for the whole EnumWindows call.
    let state = unsafe { &mut *(lparam.0 as *mut EnumState) };

    let mut window_pid: u32 = 0;
    // SAFETY: hwnd comes from EnumWindows; window_pid is a valid out pointer.
    unsafe { GetWindowThreadProcessId(hwnd, Some(&mut window_pid)) };

    // SAFETY: IsWindowVisible accepts any HWND and only reads its style.
    let visible = unsafe { IsWindowVisible(hwnd) }.as_bool();
    if window_pid == state.pid && visible {
        state.found = Some(hwnd);
        return BOOL(0); // Stop enumeration
    }
    BOOL(1)
}

impl WindowSystem for Win32Windows {
    type Handle = HWND;

    fn find_visible_window(&self, pid: u32) -> Option<HWND> {
        let mut state = EnumState { pid, found: None };

        // Stopping early makes EnumWindows return an error; the answer is in `state`.
        // SAFETY: the callback only dereferences lparam as EnumState.
        unsafe {
            let _ = EnumWindows(
                Some(enum_callback),
                LPARAM(&mut state as *mut EnumState as isize),
            );
        }

        state.found
    }

    fn client_size(&self, window: HWND) -> Result<WindowSize> {
        let mut rect = RECT::default();

        // SAFETY: GetClientRect validates the handle and fails for destroyed windows.
        unsafe { GetClientRect(window, &mut rect) }
            .map_err(|e| Error::WindowSizeFailed(e.to_string()))?;

        let width = (rect.right - rect.left).max(0) as u32;
        let height = (rect.bottom - rect.top).max(0) as u32;
        Ok(WindowSize::new(width, height))
    }
}
