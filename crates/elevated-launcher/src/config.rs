use std::{
    env, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

#[cfg(not(windows))]
use crate::utils::env::get_var_if_exists;

const APP_DIR: &str = "elevated-launcher";
const CONFIG_FILE: &str = "config.json";

#[derive(Clone, Eq, PartialEq, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    pub working_directory: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub interpreter: Option<PathBuf>,
    pub elevator: Option<PathBuf>,
    pub pause_on_error: Option<bool>,
}

#[cfg(not(windows))]
fn get_user_config_path() -> Result<PathBuf> {
    let mut path = get_var_if_exists("XDG_CONFIG_HOME").map_or_else(
        || {
            let base = env::var("HOME").context("Failed to get HOME")?;
            let mut base = PathBuf::from(base);
            base.push(".config");
            Ok(base)
        },
        |p| p.map(PathBuf::from),
    )?;
    path.push(APP_DIR);
    path.push(CONFIG_FILE);
    Ok(path)
}

#[cfg(windows)]
fn get_user_config_path() -> Result<PathBuf> {
    let base = env::var("APPDATA").context("Failed to get APPDATA")?;
    Ok([base.as_str(), APP_DIR, CONFIG_FILE].iter().collect())
}

#[cfg(not(windows))]
fn get_global_config_path() -> Result<PathBuf> {
    Ok(PathBuf::from("/etc/elevated-launcher/config.json"))
}

#[cfg(windows)]
fn get_global_config_path() -> Result<PathBuf> {
    let base = env::var("PROGRAMDATA").context("Failed to get PROGRAMDATA")?;
    Ok([base.as_str(), APP_DIR, CONFIG_FILE].iter().collect())
}

#[cfg(not(windows))]
fn get_system_config_path() -> Result<PathBuf> {
    Ok(PathBuf::from("/usr/lib/elevated-launcher/config.json"))
}

#[cfg(not(windows))]
const CONFIG_PATHS: &[fn() -> Result<PathBuf>] = &[
    get_user_config_path,
    get_global_config_path,
    get_system_config_path,
];

#[cfg(windows)]
const CONFIG_PATHS: &[fn() -> Result<PathBuf>] = &[get_user_config_path, get_global_config_path];

fn read_to_string_if_exists(p: &Path) -> Option<Result<String>> {
    match std::fs::read_to_string(p) {
        Ok(content) => Some(Ok(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(e) => Some(Err(e).with_context(|| format!("Failed to read config file {p:?}"))),
    }
}

impl Configuration {
    /// Loads `explicit` if given, otherwise the first config file found in
    /// the well-known locations. No file at all yields the default.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::parse_file(path);
        }
        Self::parse_config_file()
    }

    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path:?}"))?;
        Self::parse_str(&content).with_context(|| format!("Failed to parse config file {path:?}"))
    }

    pub fn parse_config_file() -> Result<Self> {
        let Some(content) = CONFIG_PATHS.iter().find_map(|get_config_path| {
            let config_path = match get_config_path() {
                Ok(path) => path,
                Err(e) => return Some(Err(e)),
            };
            debug!(path:? = config_path; "looking for config file");
            read_to_string_if_exists(&config_path)
        }) else {
            return Ok(Default::default());
        };
        Self::parse_str(&content?)
    }

    pub fn parse_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse configuration")
    }
}
