use std::path::PathBuf;

use serde::Serialize;

/// A platform-neutral description of the child process to start.
///
/// The launcher only ever builds requests with every flag set; the flags
/// are kept explicit so a [`Spawner`](crate::spawn::Spawner) can honor
/// them without guessing.
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub struct LaunchRequest {
    pub interpreter: PathBuf,
    /// Passed to the interpreter as its only argument.
    pub script: PathBuf,
    pub working_directory: PathBuf,
    pub hidden: bool,
    pub elevated: bool,
    pub detached: bool,
}

impl LaunchRequest {
    pub fn new<I, S, W>(interpreter: I, script: S, working_directory: W) -> Self
    where
        I: Into<PathBuf>,
        S: Into<PathBuf>,
        W: Into<PathBuf>,
    {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
            working_directory: working_directory.into(),
            hidden: true,
            elevated: true,
            detached: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_every_flag() {
        let request = LaunchRequest::new("python3", "main.py", "/srv/kiosk");
        assert!(request.hidden);
        assert!(request.elevated);
        assert!(request.detached);
        assert_eq!(request.script, PathBuf::from("main.py"));
    }

    #[test]
    fn serializes_as_flat_json_object() {
        let request = LaunchRequest::new("python3", "main.py", "/srv/kiosk");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["interpreter"], "python3");
        assert_eq!(value["working_directory"], "/srv/kiosk");
        assert_eq!(value["elevated"], true);
    }
}
