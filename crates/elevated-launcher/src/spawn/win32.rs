use std::ffi::OsStr;
use std::iter;
use std::mem;
use std::os::windows::ffi::OsStrExt as _;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::ERROR_CANCELLED;
use windows::Win32::UI::Shell::{ShellExecuteExW, SEE_MASK_NOASYNC, SHELLEXECUTEINFOW};
use windows::Win32::UI::WindowsAndMessaging::{SW_HIDE, SW_SHOWNORMAL};

use super::args::quote_windows_arg;
use super::Spawner;
use crate::privilege::is_elevated;
use crate::request::LaunchRequest;
use crate::utils::env::resolve_program;

/// Spawns through the shell, which owns the UAC consent prompt.
#[derive(Default)]
pub struct SystemSpawner;

impl SystemSpawner {
    /// Windows elevates through the `runas` verb; the elevator is unused.
    pub fn new<P>(_elevator: P) -> Self {
        Self
    }
}

fn to_wide(s: &OsStr) -> Vec<u16> {
    s.encode_wide().chain(iter::once(0)).collect()
}

impl Spawner for SystemSpawner {
    fn spawn(&mut self, request: &LaunchRequest) -> Result<()> {
        let interpreter = resolve_program(&request.interpreter);
        let parameters = quote_windows_arg(&request.script.to_string_lossy());
        debug!(interpreter:?, parameters:%; "spawning");

        let file = to_wide(interpreter.as_os_str());
        let parameters = to_wide(OsStr::new(&parameters));
        let directory = to_wide(request.working_directory.as_os_str());
        let verb = if request.elevated && !is_elevated() {
            w!("runas")
        } else {
            w!("open")
        };
        let show = if request.hidden { SW_HIDE } else { SW_SHOWNORMAL };

        // No SEE_MASK_NOCLOSEPROCESS: no process handle is kept, so the
        // child is detached as soon as the call returns.
        let mut exec_info = SHELLEXECUTEINFOW {
            cbSize: mem::size_of::<SHELLEXECUTEINFOW>() as u32,
            fMask: SEE_MASK_NOASYNC,
            lpVerb: verb,
            lpFile: PCWSTR(file.as_ptr()),
            lpParameters: PCWSTR(parameters.as_ptr()),
            lpDirectory: PCWSTR(directory.as_ptr()),
            nShow: show.0,
            ..Default::default()
        };

        // SAFETY: every pointer in `exec_info` refers to a NUL-terminated
        // buffer that outlives the call.
        match unsafe { ShellExecuteExW(&mut exec_info) } {
            Ok(()) => {
                info!("spawn request issued");
                Ok(())
            },
            Err(err) if err.code() == ERROR_CANCELLED.to_hresult() => {
                warn!("elevation was declined by the user");
                Ok(())
            },
            Err(err) => Err(err).with_context(|| format!("Failed to spawn {interpreter:?}")),
        }
    }
}
