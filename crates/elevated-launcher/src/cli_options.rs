use std::path::PathBuf;

use bpaf::{construct, long, OptionParser, Parser};

#[derive(Clone, Debug)]
pub struct Options {
    pub working_directory: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub interpreter: Option<PathBuf>,
    pub elevator: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub no_pause: bool,
    pub dry_run: bool,
}

pub fn options() -> OptionParser<Options> {
    let working_directory = long("workdir")
        .short('C')
        .env("ELEVATED_LAUNCHER_WORKDIR")
        .help(
            "Directory the script runs in. It must exist; the launcher
            refuses to start anything otherwise",
        )
        .argument("DIR")
        .optional();
    let script = long("script")
        .short('s')
        .env("ELEVATED_LAUNCHER_SCRIPT")
        .help("Script filename, relative to the working directory")
        .argument("NAME")
        .optional();
    let interpreter = long("interpreter")
        .short('i')
        .env("ELEVATED_LAUNCHER_INTERPRETER")
        .help(
            "Program that runs the script
    [default: pythonw on Windows, python3 elsewhere]",
        )
        .argument("PROGRAM")
        .optional();
    let elevator = long("elevator")
        .env("ELEVATED_LAUNCHER_ELEVATOR")
        .help(
            "Program used to gain elevated rights, e.g. pkexec, sudo or doas.
            Ignored on Windows, which uses the UAC consent prompt
    [default: pkexec]",
        )
        .argument("PROGRAM")
        .optional();
    let config = long("config")
        .env("ELEVATED_LAUNCHER_CONFIG")
        .help("Read settings from this JSON file instead of the default locations")
        .argument("PATH")
        .optional();
    let no_pause = long("no-pause")
        .help("Exit right away on failure instead of waiting for Enter")
        .switch();
    let dry_run = long("dry-run")
        .short('n')
        .help("Print the launch request as JSON instead of spawning it")
        .switch();

    construct!(Options {
        working_directory,
        script,
        interpreter,
        elevator,
        config,
        no_pause,
        dry_run,
    })
    .to_options()
    .descr("Launch a script through its interpreter, elevated, hidden and detached")
    .version(env!("CARGO_PKG_VERSION"))
}
