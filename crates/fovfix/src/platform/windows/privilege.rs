use tracing::debug;
use windows::Win32::Foundation::{CloseHandle, ERROR_NOT_ALL_ASSIGNED, GetLastError, HANDLE, LUID};
use windows::Win32::Security::{
    AdjustTokenPrivileges, LUID_AND_ATTRIBUTES, LookupPrivilegeValueW, SE_DEBUG_NAME,
    SE_PRIVILEGE_ENABLED, TOKEN_ADJUST_PRIVILEGES, TOKEN_PRIVILEGES, TOKEN_QUERY,
};
use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};
use windows::core::PCWSTR;

use crate::error::{Error, Result};

/// Enable `SeDebugPrivilege` for the current process.
///
/// Needed to open the game with memory write access. Only succeeds when
/// running as administrator.
pub fn enable_debug_privilege() -> Result<()> {
    let mut token = HANDLE::default();

    // SAFETY: GetCurrentProcess returns a pseudo handle; token receives a new handle.
    unsafe {
        OpenProcessToken(
            GetCurrentProcess(),
            TOKEN_ADJUST_PRIVILEGES | TOKEN_QUERY,
            &mut token,
        )
    }
    .map_err(|e| Error::PrivilegeFailed(format!("OpenProcessToken: {e}")))?;

    let result = adjust_debug_privilege(token);

    // SAFETY: token was opened above and is closed once.
    unsafe {
        let _ = CloseHandle(token);
    }

    if result.is_ok() {
        debug!("SeDebugPrivilege enabled");
    }
    result
}

fn adjust_debug_privilege(token: HANDLE) -> Result<()> {
    let mut luid = LUID::default();

    // SAFETY: SE_DEBUG_NAME is a static wide string; luid is a valid out pointer.
    unsafe { LookupPrivilegeValueW(PCWSTR::null(), SE_DEBUG_NAME, &mut luid) }
        .map_err(|e| Error::PrivilegeFailed(format!("LookupPrivilegeValueW: {e}")))?;

    let privileges = TOKEN_PRIVILEGES {
        PrivilegeCount: 1,
        Privileges: [LUID_AND_ATTRIBUTES {
            Luid: luid,
            Attributes: SE_PRIVILEGE_ENABLED,
        }],
    };

    // SAFETY: privileges outlives the call; no previous state is requested.
    unsafe { AdjustTokenPrivileges(token, false, Some(&privileges), 0, None, None) }
        .map_err(|e| Error::PrivilegeFailed(format!("AdjustTokenPrivileges: {e}")))?;

    // AdjustTokenPrivileges succeeds even when the privilege was not assigned
    // SAFETY: GetLastError is always safe to call.
    if unsafe { GetLastError() } == ERROR_NOT_ALL_ASSIGNED {
        return Err(Error::PrivilegeFailed(
            "SeDebugPrivilege is not held; run as administrator".to_string(),
        ));
    }

    Ok(())
}
