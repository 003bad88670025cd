use std::io::{self, Write};
use std::path::{self, Path};
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::debug;

use crate::error::LaunchError;
use crate::request::LaunchRequest;
use crate::settings::Settings;
use crate::spawn::Spawner;

/// How one invocation ended, as far as the exit status is concerned.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum LaunchStatus {
    Issued(LaunchRequest),
    MissingWorkingDirectory,
}

impl LaunchStatus {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Issued(_) => 0,
            Self::MissingWorkingDirectory => 1,
        }
    }
}

impl From<LaunchStatus> for ExitCode {
    fn from(status: LaunchStatus) -> Self {
        ExitCode::from(status.exit_code())
    }
}

/// Succeeds only for an existing directory; a regular file cannot serve as
/// the child's working directory.
pub fn check_working_directory(path: &Path) -> Result<(), LaunchError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(LaunchError::MissingWorkingDirectory(path.to_path_buf()))
    }
}

/// Checks the working directory, then issues exactly one spawn request.
///
/// Nothing is spawned when the check fails. The returned request is the one
/// handed to `spawner`; the child itself is never waited on.
pub fn launch<S>(settings: &Settings, mut spawner: S) -> Result<LaunchRequest>
where
    S: Spawner,
{
    let working_directory = &settings.working_directory;
    check_working_directory(working_directory)?;
    // Elevators may start the child somewhere else entirely, so a relative
    // path would no longer name the directory that was checked.
    let working_directory = path::absolute(working_directory)
        .with_context(|| format!("Failed to resolve {working_directory:?} to an absolute path"))?;

    let request = LaunchRequest::new(&settings.interpreter, &settings.script, working_directory);
    debug!(request:? = request; "launch request");
    spawner
        .spawn(&request)
        .context("Failed to issue spawn request")?;
    Ok(request)
}

/// Runs [`launch`] and turns a missing working directory into a reported
/// failure status. Any other error is handed back to the caller.
pub fn run<S, W, P>(
    settings: &Settings,
    spawner: S,
    diagnostics: W,
    pause: P,
) -> Result<LaunchStatus>
where
    S: Spawner,
    W: Write,
    P: FnOnce() -> io::Result<()>,
{
    match launch(settings, spawner) {
        Ok(request) => Ok(LaunchStatus::Issued(request)),
        Err(err) if err.downcast_ref::<LaunchError>().is_some() => {
            report_failure(&err, settings.pause_on_error, diagnostics, pause)?;
            Ok(LaunchStatus::MissingWorkingDirectory)
        },
        Err(err) => Err(err),
    }
}

/// Prints `err` and, when asked to, waits until the user has seen it.
pub fn report_failure<W, P>(
    err: &anyhow::Error,
    pause_on_error: bool,
    mut diagnostics: W,
    pause: P,
) -> Result<()>
where
    W: Write,
    P: FnOnce() -> io::Result<()>,
{
    writeln!(diagnostics, "Error: {err:#}").context("Failed to write diagnostic")?;
    if pause_on_error {
        pause().context("Failed to wait for acknowledgement")?;
    }
    Ok(())
}
