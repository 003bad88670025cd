use std::env::{self, VarError};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::debug;

use super::fs::find_executable;

/// `None` if `name` is unset; an error if it is set but not valid Unicode.
pub fn get_var_if_exists(name: &str) -> Option<Result<String>> {
    match env::var(name) {
        Ok(value) => Some(Ok(value)),
        Err(VarError::NotPresent) => None,
        Err(err) => Some(Err(err).with_context(|| format!("Failed to get `{name}` env var"))),
    }
}

pub fn find_in_path<P>(program: P) -> Result<Option<PathBuf>>
where
    P: AsRef<Path>,
{
    // Impossible to perform search if `PATH` env var is not set or invalid.
    let Ok(path_env) = env::var("PATH") else {
        return Err(anyhow!("`PATH` env var is not set or invalid"));
    };

    find_in_dirs(program, env::split_paths(&path_env))
}

pub fn find_in_dirs<P, I>(program: P, search_paths: I) -> Result<Option<PathBuf>>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = PathBuf>,
{
    let program = program.as_ref();

    // Only accept program name, i.e. a relative path with one component.
    if program.parent() != Some(Path::new("")) {
        return Err(anyhow!("invalid program name {program:?}"));
    };

    for search_path in search_paths {
        let path = search_path.join(program);
        if let Some(path) = find_executable(&path)
            .with_context(|| format!("Failed to check existence of {path:?}"))?
        {
            return Ok(Some(path));
        }
    }

    Ok(None)
}

/// Turns a bare program name into the path `PATH` lookup finds for it.
///
/// Anything that already has a directory component is returned untouched,
/// as is a name the lookup cannot find: the child reports that failure, not
/// the launcher.
pub fn resolve_program(program: &Path) -> PathBuf {
    if program.parent() != Some(Path::new("")) {
        return program.to_path_buf();
    }
    match find_in_path(program) {
        Ok(Some(path)) => path,
        Ok(None) => {
            debug!(program:?; "program not found in PATH");
            program.to_path_buf()
        },
        Err(err) => {
            debug!(program:?, err:?; "PATH lookup failed");
            program.to_path_buf()
        },
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt as _;

    use super::*;

    fn make_executable(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn first_match_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        make_executable(second.path(), "python3");
        let expected = make_executable(first.path(), "python3");

        let found = find_in_dirs(
            "python3",
            [first.path().to_path_buf(), second.path().to_path_buf()],
        )
        .unwrap();
        assert_eq!(found, Some(expected.canonicalize().unwrap()));
    }

    #[test]
    fn missing_program_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let found = find_in_dirs("python3", [dir.path().to_path_buf()]).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn paths_are_not_program_names() {
        assert!(find_in_dirs("bin/python3", Vec::new()).is_err());
    }

    #[test]
    fn resolve_keeps_explicit_paths() {
        let path = Path::new("/opt/python/bin/python3");
        assert_eq!(resolve_program(path), path);
    }
}
