use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use elevated_launcher::cli_options::options;
use elevated_launcher::config::Configuration;
use elevated_launcher::launch::{report_failure, run};
use elevated_launcher::prompt::pause;
use elevated_launcher::settings::Settings;
use elevated_launcher::spawn::{PrintSpawner, SystemSpawner};
use log::debug;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let options = options().fallback_to_usage().run();
    let config = match Configuration::load(options.config.as_deref())
        .context("Failed to load configuration")
    {
        Ok(config) => config,
        Err(err) => return fail(&err, !options.no_pause),
    };
    let pause_on_error = Settings::pause_on_error(&options, &config);
    let settings = match Settings::resolve(options, config) {
        Ok(settings) => settings,
        Err(err) => return fail(&err, pause_on_error),
    };
    debug!(settings:? = settings; "resolved settings");

    // The child is detached; its fate does not affect our exit status.
    let status = if settings.dry_run {
        run(
            &settings,
            PrintSpawner::new(io::stdout().lock()),
            io::stderr(),
            pause,
        )?
    } else {
        run(
            &settings,
            SystemSpawner::new(&settings.elevator),
            io::stderr(),
            pause,
        )?
    };
    Ok(status.into())
}

/// Reports a failure that happened before any launch was attempted.
fn fail(err: &anyhow::Error, pause_on_error: bool) -> Result<ExitCode> {
    report_failure(err, pause_on_error, io::stderr(), pause)?;
    Ok(ExitCode::FAILURE)
}
