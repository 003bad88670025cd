use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::cli_options::Options;
use crate::config::Configuration;

#[cfg(windows)]
pub const DEFAULT_INTERPRETER: &str = "pythonw";
#[cfg(not(windows))]
pub const DEFAULT_INTERPRETER: &str = "python3";

pub const DEFAULT_ELEVATOR: &str = "pkexec";

/// Everything one launch needs, after flags and environment variables have
/// been laid over the config file and the built-in defaults.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Settings {
    pub working_directory: PathBuf,
    pub script: PathBuf,
    pub interpreter: PathBuf,
    pub elevator: PathBuf,
    pub pause_on_error: bool,
    pub dry_run: bool,
}

impl Settings {
    /// Known even when the rest of the settings fail to resolve, so that
    /// failure can still be paused on.
    pub fn pause_on_error(options: &Options, config: &Configuration) -> bool {
        !options.no_pause && config.pause_on_error.unwrap_or(true)
    }

    pub fn resolve(options: Options, config: Configuration) -> Result<Self> {
        let pause_on_error = Self::pause_on_error(&options, &config);
        let working_directory = options
            .working_directory
            .or(config.working_directory)
            .ok_or_else(|| {
                anyhow!(
                    "no working directory configured: pass --workdir, set \
                     ELEVATED_LAUNCHER_WORKDIR or add `working_directory` to the config file"
                )
            })?;
        let script = options.script.or(config.script).ok_or_else(|| {
            anyhow!(
                "no script configured: pass --script, set ELEVATED_LAUNCHER_SCRIPT or add \
                 `script` to the config file"
            )
        })?;
        let interpreter = options
            .interpreter
            .or(config.interpreter)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INTERPRETER));
        let elevator = options
            .elevator
            .or(config.elevator)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ELEVATOR));

        Ok(Self {
            working_directory,
            script,
            interpreter,
            elevator,
            pause_on_error,
            dry_run: options.dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Options {
        Options {
            working_directory: None,
            script: None,
            interpreter: None,
            elevator: None,
            config: None,
            no_pause: false,
            dry_run: false,
        }
    }

    fn config() -> Configuration {
        Configuration {
            working_directory: Some("/srv/kiosk/client".into()),
            script: Some("main.py".into()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_fill_the_gaps() {
        let settings = Settings::resolve(options(), config()).unwrap();
        assert_eq!(settings.working_directory, PathBuf::from("/srv/kiosk/client"));
        assert_eq!(settings.script, PathBuf::from("main.py"));
        assert_eq!(settings.interpreter, PathBuf::from(DEFAULT_INTERPRETER));
        assert_eq!(settings.elevator, PathBuf::from(DEFAULT_ELEVATOR));
        assert!(settings.pause_on_error);
        assert!(!settings.dry_run);
    }

    #[test]
    fn flags_override_config() {
        let options = Options {
            working_directory: Some("/opt/client".into()),
            interpreter: Some("python3.12".into()),
            no_pause: true,
            ..options()
        };
        let config = Configuration {
            interpreter: Some("python3.11".into()),
            pause_on_error: Some(true),
            ..config()
        };

        let settings = Settings::resolve(options, config).unwrap();
        assert_eq!(settings.working_directory, PathBuf::from("/opt/client"));
        assert_eq!(settings.script, PathBuf::from("main.py"));
        assert_eq!(settings.interpreter, PathBuf::from("python3.12"));
        assert!(!settings.pause_on_error);
    }

    #[test]
    fn config_can_disable_pause() {
        let config = Configuration {
            pause_on_error: Some(false),
            ..config()
        };
        assert!(!Settings::resolve(options(), config).unwrap().pause_on_error);
    }

    #[test]
    fn working_directory_is_required() {
        let err = Settings::resolve(options(), Configuration::default()).unwrap_err();
        assert!(err.to_string().contains("--workdir"));
    }

    #[test]
    fn pause_is_known_without_working_directory() {
        let config = Configuration::default();
        assert!(Settings::pause_on_error(&options(), &config));

        let no_pause = Options {
            no_pause: true,
            ..options()
        };
        assert!(!Settings::pause_on_error(&no_pause, &config));
        assert!(Settings::resolve(no_pause, config).is_err());
    }

    #[test]
    fn script_is_required() {
        let config = Configuration {
            script: None,
            ..config()
        };
        let err = Settings::resolve(options(), config).unwrap_err();
        assert!(err.to_string().contains("--script"));
    }
}
