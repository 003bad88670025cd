#[cfg(windows)]
use std::env;
#[cfg(unix)]
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt as _;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use anyhow::Context;
use anyhow::Result;

#[cfg(windows)]
const DEFAULT_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

#[cfg(unix)]
pub fn find_executable<P>(path: P) -> Result<Option<PathBuf>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.is_file() {
        return Ok(None);
    }

    let Ok(metadata) = fs::metadata(path) else {
        return Ok(None);
    };

    if metadata.permissions().mode() & 0o111 != 0 {
        let path = path.canonicalize().context("Failed to canonicalize path")?;
        return Ok(Some(path));
    }

    Ok(None)
}

/// Windows has no executable bit; a candidate is executable when it exists
/// with one of the `PATHEXT` extensions appended.
#[cfg(windows)]
pub fn find_executable<P>(path: P) -> Result<Option<PathBuf>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if path.extension().is_some() && path.is_file() {
        return Ok(Some(path.to_path_buf()));
    }

    let pathext = env::var("PATHEXT").unwrap_or_else(|_| DEFAULT_PATHEXT.to_owned());
    for ext in pathext.split(';').filter(|ext| !ext.is_empty()) {
        let mut candidate = path.as_os_str().to_owned();
        candidate.push(ext);
        let candidate = PathBuf::from(candidate);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt as _;

    use super::*;

    #[test]
    fn executable_file_is_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("python3");
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o755)).unwrap();

        let found = find_executable(&path).unwrap().unwrap();
        assert_eq!(found, path.canonicalize().unwrap());
    }

    #[test]
    fn non_executable_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("python3");
        fs::write(&path, "").unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o644)).unwrap();

        assert_eq!(find_executable(&path).unwrap(), None);
    }

    #[test]
    fn directory_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_executable(dir.path()).unwrap(), None);
    }
}
