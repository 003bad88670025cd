use std::ffi::OsString;
use std::os::unix::process::CommandExt as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{anyhow, Context, Result};
use log::{debug, info};

use super::Spawner;
use crate::privilege::is_elevated;
use crate::request::LaunchRequest;
use crate::utils::env::resolve_program;

/// Elevation tools such as `pkexec` reset the working directory, so the
/// elevated side changes into it again before replacing itself with the
/// interpreter. `$0` is the directory, `$@` the interpreter and its script.
const CHDIR_AND_EXEC: &str = r#"cd -- "$0" && exec "$@""#;

pub struct SystemSpawner {
    elevator: PathBuf,
}

impl SystemSpawner {
    pub fn new<P>(elevator: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            elevator: elevator.into(),
        }
    }
}

/// Builds the argv for `request`, going through `elevator` when one is
/// given.
pub fn command_line(
    request: &LaunchRequest,
    interpreter: &Path,
    elevator: Option<&Path>,
) -> Vec<OsString> {
    let mut argv: Vec<OsString> = Vec::with_capacity(7);
    if let Some(elevator) = elevator {
        argv.push(elevator.into());
        argv.push("/bin/sh".into());
        argv.push("-c".into());
        argv.push(CHDIR_AND_EXEC.into());
        argv.push(request.working_directory.clone().into_os_string());
    }
    argv.push(interpreter.into());
    argv.push(request.script.clone().into_os_string());
    argv
}

impl Spawner for SystemSpawner {
    fn spawn(&mut self, request: &LaunchRequest) -> Result<()> {
        let interpreter = resolve_program(&request.interpreter);
        let elevator =
            (request.elevated && !is_elevated()).then(|| resolve_program(&self.elevator));
        let argv = command_line(request, &interpreter, elevator.as_deref());
        let Some((program, args)) = argv.split_first() else {
            return Err(anyhow!("empty command line"));
        };

        let mut command = Command::new(program);
        command.args(args).current_dir(&request.working_directory);
        if request.hidden {
            command
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        }
        if request.detached {
            // SAFETY: `setsid` is async-signal-safe and touches no memory
            // shared with the parent.
            unsafe {
                command.pre_exec(|| {
                    rustix::process::setsid()?;
                    Ok(())
                });
            }
        }

        debug!(argv:? = argv; "spawning");
        let child = command
            .spawn()
            .with_context(|| format!("Failed to spawn {program:?}"))?;
        // Dropping `child` neither waits for nor kills it.
        info!(pid = child.id(); "spawn request issued");
        Ok(())
    }
}
