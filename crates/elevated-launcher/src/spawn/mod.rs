use anyhow::Result;

use crate::request::LaunchRequest;

pub mod args;
mod print;
#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod win32;

pub use self::print::PrintSpawner;
#[cfg(unix)]
pub use self::unix::{command_line, SystemSpawner};
#[cfg(windows)]
pub use self::win32::SystemSpawner;

/// Issues spawn requests. Implementations must not wait for the child.
pub trait Spawner {
    fn spawn(&mut self, request: &LaunchRequest) -> Result<()>;
}

impl<S: Spawner + ?Sized> Spawner for &mut S {
    fn spawn(&mut self, request: &LaunchRequest) -> Result<()> {
        (**self).spawn(request)
    }
}
