use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum LaunchError {
    MissingWorkingDirectory(PathBuf),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingWorkingDirectory(path) => {
                write!(f, "working directory {path:?} does not exist or is not a directory")
            },
        }
    }
}

impl std::error::Error for LaunchError {}
